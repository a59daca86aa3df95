//! # ミドルウェア
//!
//! 通信サービス用のミドルウェアを提供する。

mod panic;
mod required_params;

pub use panic::handle_panic;
pub use required_params::{
    ParamKind,
    ParamSource,
    ParamSpec,
    RouteParams,
    SEND_ROUTE_PARAMS,
    check_params,
    require_params,
};
