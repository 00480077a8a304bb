use crate::github::responses::Repository;
use std::{borrow::Cow, fmt};

macro_rules! write_col {
    ($w:expr, $len:expr, $txt:expr) => {
        write!($w, "{:len$}", ellipsize($txt, $len as _), len = $len as _)
    };
    (, $w:expr, $len:expr, $txt:expr) => {
        write!($w, " | {:len$}", ellipsize($txt, $len as _), len = $len as _)
    };
}

const FULL_NAME_LEN: u8 = 30;
const DESCRIPTION_LEN: u8 = 60;

pub fn ellipsize(text: &str, threshold: usize) -> Cow<'_, str> {
    debug_assert!(threshold > 2);
    if text.len() <= threshold {
        text.into()
    } else {
        let text: String =
            text.chars().map(|c| if c == '\n' { ' ' } else { c }).take(threshold - 2).collect();
        let text: String = text.trim().chars().chain("..".chars()).collect();
        text.into()
    }
}

#[cfg(test)]
#[test]
fn test_ellipsize() {
    use quickcheck::{quickcheck, TestResult};

    fn has_max_length_threshold(text: String, threshold: usize) -> TestResult {
        if threshold < 3 {
            return TestResult::discard();
        }
        TestResult::from_bool(ellipsize(&text, threshold).chars().count() <= threshold)
    }

    quickcheck(has_max_length_threshold as fn(_, _) -> TestResult);

    fn has_ellipsis_at_the_end(text: String, threshold: usize) -> TestResult {
        if threshold < 3 {
            return TestResult::discard();
        }
        if text.len() <= threshold {
            return TestResult::discard();
        }
        let ellipsized = ellipsize(&text, threshold);
        TestResult::from_bool(ellipsized.ends_with(".."))
    }

    quickcheck(has_ellipsis_at_the_end as fn(_, _) -> TestResult);
}

/// One dashboard row: full name, description, and the detail route.
#[derive(Debug)]
pub struct RepositoryRow<'a>(pub &'a Repository);

impl fmt::Display for RepositoryRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repo = self.0;

        write_col!(f, FULL_NAME_LEN, &repo.full_name)?;

        let desc = repo.description.as_deref().unwrap_or_default();
        write_col!(, f, DESCRIPTION_LEN, desc)?;

        write!(f, " | /repositories/{}", repo.full_name)?;

        Ok(())
    }
}

/// The repository detail panel.
#[derive(Debug)]
pub struct RepositoryPanel<'a>(pub &'a Repository);

impl fmt::Display for RepositoryPanel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repo = self.0;

        writeln!(f, "{}", repo.full_name)?;
        let desc = repo.description.as_deref().unwrap_or_default();
        if !desc.is_empty() {
            writeln!(f, "{}", desc)?;
        }
        writeln!(f)?;
        writeln!(f, "{:>12}  {}", "Owner", repo.owner.login)?;
        writeln!(f, "{:>12}  {}", "Avatar", repo.owner.avatar_url)?;
        writeln!(f)?;
        // TODO: fetch the counts from the lookup endpoint; the stored entry
        // does not carry them.
        writeln!(f, "{:>12}  -", "Stars")?;
        writeln!(f, "{:>12}  -", "Forks")?;
        write!(f, "{:>12}  -", "Open issues")?;

        Ok(())
    }
}
