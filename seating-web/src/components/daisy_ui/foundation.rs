use yew::Classes;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DaisyColor {
    #[default]
    Neutral,
    Info,
    Success,
    Error,
}

impl DaisyColor {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DaisySize {
    Xs,
    #[default]
    Sm,
    Md,
}

impl DaisySize {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }

    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}

#[cfg(test)]
mod tests {
    use super::{DaisyColor, DaisySize, class_list};
    use yew::Classes;

    #[test]
    fn color_and_size_classes_join_prefix() {
        assert_eq!(DaisyColor::Success.class("btn"), "btn-success");
        assert_eq!(DaisyColor::Info.class("bg"), "bg-info");
        assert_eq!(DaisySize::Sm.class("btn"), "btn-sm");
        assert_eq!(DaisySize::default(), DaisySize::Sm);
    }

    #[test]
    fn class_list_combines_base_and_extra() {
        let extra = Classes::from("mx-1");
        let rendered = class_list(&["btn", "btn-error"], &extra).to_string();
        assert!(rendered.contains("btn-error"));
        assert!(rendered.contains("mx-1"));
    }
}
