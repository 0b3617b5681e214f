//! Generic presentational primitives: button, card, input, textarea.
//!
//! Each primitive returns markup with the base classes of the component
//! library plus whatever classes the caller layers on top. Text and
//! attribute values go through [`escape`]; `content` arguments are trusted
//! markup produced by other render functions.

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_attrs(attrs: &[(&str, &str)]) -> String {
    attrs
        .iter()
        .map(|(k, v)| format!(r#" {}="{}""#, k, escape(v)))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Ghost,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Icon,
}

const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium ring-offset-background transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50";

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
            ButtonVariant::Ghost => "hover:bg-accent hover:text-accent-foreground",
            ButtonVariant::Outline => {
                "border border-input bg-background hover:bg-accent hover:text-accent-foreground"
            }
        }
    }
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Default => "h-10 px-4 py-2",
            ButtonSize::Icon => "h-10 w-10",
        }
    }
}

/// `<button>`; defaults to `type="button"` unless `attrs` sets a type.
pub fn button(
    variant: ButtonVariant,
    size: ButtonSize,
    class: &str,
    attrs: &[(&str, &str)],
    content: &str,
) -> String {
    let type_attr = if attrs.iter().any(|(k, _)| *k == "type") {
        ""
    } else {
        r#" type="button""#
    };
    format!(
        r#"<button{}{} class="{} {} {} {}">{}</button>"#,
        type_attr,
        render_attrs(attrs),
        BUTTON_BASE,
        variant.class(),
        size.class(),
        class,
        content
    )
}

pub fn card(class: &str, content: &str) -> String {
    format!(
        r#"<div class="rounded-lg border bg-card text-card-foreground shadow-sm {}">{}</div>"#,
        class, content
    )
}

const FIELD_BASE: &str = "flex w-full rounded-md border border-input bg-background px-3 py-2 text-base ring-offset-background placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50 md:text-sm";

pub fn input(kind: &str, name: &str, placeholder: &str, class: &str) -> String {
    format!(
        r#"<input type="{}" name="{}" placeholder="{}" class="{} h-10 {}"/>"#,
        escape(kind),
        escape(name),
        escape(placeholder),
        FIELD_BASE,
        class
    )
}

pub fn textarea(name: &str, placeholder: &str, rows: u32, class: &str) -> String {
    format!(
        r#"<textarea name="{}" placeholder="{}" rows="{}" class="{} min-h-[80px] {}"></textarea>"#,
        escape(name),
        escape(placeholder),
        rows,
        FIELD_BASE,
        class
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn button_defaults_to_non_submitting_type() {
        let html = button(ButtonVariant::Ghost, ButtonSize::Icon, "x", &[], "");
        assert!(html.starts_with(r#"<button type="button""#));
        let submit = button(
            ButtonVariant::Default,
            ButtonSize::Default,
            "",
            &[("type", "submit")],
            "Send",
        );
        assert!(submit.contains(r#"type="submit""#));
        assert!(!submit.contains(r#"type="button""#));
    }
}
