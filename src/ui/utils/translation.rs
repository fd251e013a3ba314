use std::collections::HashMap;

#[macro_export]
macro_rules! tr {
    ($translations:expr, $key:expr) => {
        $crate::ui::utils::translation::tr_impl($translations, $key, &[])
    };
    ($translations:expr, $key:expr, $( $k:expr => $v:expr ),* ) => {
        $crate::ui::utils::translation::tr_impl($translations, $key, &[ $( ($k, $v) ),* ])
    };
}

/// Looks `key` up and fills its `{name}` placeholders. Unknown keys render as themselves.
pub fn tr_impl(
    translations: &HashMap<String, String>,
    key: &str,
    params: &[(&str, &str)],
) -> String {
    let text = translations.get(key).map_or(key, String::as_str);
    params
        .iter()
        .fold(text.to_string(), |result, (name, value)| {
            result.replace(&format!("{{{name}}}"), value)
        })
}
