//! The [`ini!`](crate::ini) macro for building documents inline.

/// Builds an [`Ini`](crate::Ini) from section and key literals.
///
/// Values can be anything implementing `Display`. Sections appear in the
/// order written, `""` being the unnamed section, and a section with no keys
/// is still created.
///
/// An options expression followed by `;` may come first.
///
/// # Examples
///
/// ```rust
/// use inidoc::{ini, IniOptions};
///
/// let doc = ini! {
///     "server" => { "host" => "localhost", "port" => 8080 },
///     "empty" => {},
/// };
/// assert_eq!(doc.save(), "[server]\nhost = localhost\nport = 8080\n\n\n[empty]\n");
///
/// let multi = ini! {
///     IniOptions::new().with_multikey(true);
///     "mirrors" => { "url" => "a", "url" => "b" },
/// };
/// assert_eq!(multi.get_all("mirrors", "url"), vec!["a", "b"]);
/// ```
#[macro_export]
macro_rules! ini {
    ($($section:expr => { $($key:expr => $value:expr),* $(,)? }),* $(,)?) => {
        $crate::ini!($crate::IniOptions::default(); $($section => { $($key => $value),* }),*)
    };

    ($options:expr; $($section:expr => { $($key:expr => $value:expr),* $(,)? }),* $(,)?) => {{
        let mut doc = $crate::Ini::with_options($options);
        $({
            let section: &str = $section;
            doc.add_section(section);
            $(
                doc.set(section, $key, &::std::string::ToString::to_string(&$value));
            )*
        })*
        doc
    }};
}
