//! Class-list helpers for the styling surface.

/// Join class fragments into one `class` attribute value, skipping blanks.
pub fn join_classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Default,
    Sm,
}

/// Class list for a link styled as a button, with `extra` appended.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let variant = match variant {
        ButtonVariant::Primary => "button--primary",
        ButtonVariant::Ghost => "button--ghost",
    };
    let size = match size {
        ButtonSize::Default => "",
        ButtonSize::Sm => "button--sm",
    };
    join_classes(["button", variant, size, extra])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blanks_are_dropped() {
        assert_eq!(join_classes(["a", "", "  ", " b "]), "a b");
        assert_eq!(join_classes(std::iter::empty()), "");
    }

    #[test]
    fn button_classes() {
        assert_eq!(
            button_class(ButtonVariant::Ghost, ButtonSize::Sm, ""),
            "button button--ghost button--sm"
        );
        assert_eq!(
            button_class(ButtonVariant::Primary, ButtonSize::Sm, "navbar__cta"),
            "button button--primary button--sm navbar__cta"
        );
        assert_eq!(
            button_class(ButtonVariant::Ghost, ButtonSize::Default, ""),
            "button button--ghost"
        );
    }
}
