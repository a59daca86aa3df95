//! # 理由テンプレートの整形
//!
//! `{0}`, `{1}`, ... の位置指定プレースホルダにパラメータを埋め込む。

/// テンプレートにパラメータを埋め込む
///
/// - `{n}` は `parameters[n]` に置換する
/// - 対応するパラメータがない `{n}` はそのまま残す
/// - パラメータが空ならテンプレートをそのまま返す
///
/// ```rust
/// use aws_communication_domain::format_message;
///
/// assert_eq!(
///     format_message("{0} not found for given input: {1}", &["Template", "X"]),
///     "Template not found for given input: X"
/// );
/// ```
pub fn format_message<S: AsRef<str>>(template: &str, parameters: &[S]) -> String {
    if parameters.is_empty() {
        return template.to_string();
    }

    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let Some(close) = after_open.find('}') else {
            output.push_str(&rest[open..]);
            return output;
        };

        let placeholder = &after_open[..close];
        let parameter = placeholder
            .parse::<usize>()
            .ok()
            .filter(|_| placeholder.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|index| parameters.get(index));

        match parameter {
            Some(value) => output.push_str(value.as_ref()),
            None => output.push_str(&rest[open..open + close + 2]),
        }
        rest = &after_open[close + 1..];
    }

    output.push_str(rest);
    output
}
