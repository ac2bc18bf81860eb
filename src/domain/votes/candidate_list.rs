use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

pub const UNKNOWN_LIST: &str = "Unknown List";

/// Electoral lists recognised in the form headers. Declaration order is matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
pub enum KnownList {
    #[strum(serialize = "لائحة ٢٠٤٠")]
    List2040,
    #[strum(serialize = "قرطبا بتستاهل")]
    QartabaBtestahel,
}

impl KnownList {
    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// Label of the first known list mentioned in `header`, or [`UNKNOWN_LIST`].
///
/// Header text drifting away from the exact labels silently lands in [`UNKNOWN_LIST`].
pub fn classify_list(header: &str) -> &'static str {
    KnownList::iter()
        .map(KnownList::label)
        .find(|label| header.contains(label))
        .unwrap_or(UNKNOWN_LIST)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(KnownList::List2040.label(), "لائحة ٢٠٤٠");
        assert_eq!(KnownList::QartabaBtestahel.label(), "قرطبا بتستاهل");
    }

    #[test]
    fn test_classify_first_list() {
        assert_eq!(classify_list("مرشح [سامي] لائحة ٢٠٤٠"), "لائحة ٢٠٤٠");
    }

    #[test]
    fn test_classify_second_list() {
        assert_eq!(classify_list("[ليلى] قرطبا بتستاهل"), "قرطبا بتستاهل");
    }

    #[test]
    fn test_classify_priority_when_both_present() {
        assert_eq!(
            classify_list("قرطبا بتستاهل / لائحة ٢٠٤٠ [Nour]"),
            "لائحة ٢٠٤٠"
        );
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify_list("[Bob] unaffiliated"), UNKNOWN_LIST);
        assert_eq!(classify_list(""), UNKNOWN_LIST);
    }

    #[test]
    fn test_classify_near_miss_is_unknown() {
        // Western digits instead of Arabic-Indic ones
        assert_eq!(classify_list("[Rami] لائحة 2040"), UNKNOWN_LIST);
    }
}
