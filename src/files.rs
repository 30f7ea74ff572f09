use std::{
    error::Error,
    io::Read,
    path::{Path, PathBuf},
};

use crate::types::PlanDocument;

/// Where a plan is read from.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Input {
    Stdin,
    File(PathBuf),
}
impl Input {
    /// Expands `-` to stdin and glob patterns to the files they match, in path order.
    ///
    /// A pattern matching nothing is kept as a plain path so that reading it reports the error.
    pub fn expand(pattern: &str) -> Result<Vec<Self>, Box<dyn Error>> {
        if pattern == "-" {
            return Ok(vec![Input::Stdin]);
        }

        let mut paths = glob::glob(pattern)?.collect::<Result<Vec<_>, _>>()?;
        if paths.is_empty() {
            paths.push(PathBuf::from(pattern));
        }
        paths.sort();

        Ok(paths.into_iter().map(Input::File).collect())
    }

    pub fn read_to_string(&self) -> std::io::Result<String> {
        match self {
            Input::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().read_to_string(&mut buffer)?;
                Ok(buffer)
            }
            Input::File(path) => std::fs::read_to_string(path),
        }
    }

    pub fn read_plan(&self) -> Result<PlanDocument, Box<dyn Error>> {
        Ok(PlanDocument::from_json(&self.read_to_string()?)?)
    }

    /// `plans/week-12.json` becomes `week-12.html`, stdin becomes `plan.html`.
    pub fn output_name(&self) -> String {
        let stem = match self {
            Input::Stdin => None,
            Input::File(path) => path.file_stem().and_then(|s| s.to_str()),
        };
        format!("{}.html", stem.unwrap_or("plan"))
    }
}
impl std::fmt::Display for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Stdin => write!(f, "<stdin>"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Leaves a rendered page alone when it already has these contents, so its last-modified date
/// only moves when the plan does. Returns whether the file was written.
pub fn write_if_changed(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> std::io::Result<bool> {
    let (path, contents) = (path.as_ref(), contents.as_ref());
    if std::fs::read(path).is_ok_and(|existing| existing == contents) {
        return Ok(false);
    }
    std::fs::write(path, contents)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_names() {
        assert_eq!(Input::Stdin.output_name(), "plan.html");
        assert_eq!(
            Input::File("plans/week-12.json".into()).output_name(),
            "week-12.html"
        );
    }

    #[test]
    fn dash_is_stdin() {
        assert_eq!(Input::expand("-").unwrap(), [Input::Stdin]);
    }

    #[test]
    fn unmatched_patterns_are_kept() {
        let inputs = Input::expand("./does-not-exist/*.json").unwrap();
        assert_eq!(inputs, [Input::File("./does-not-exist/*.json".into())]);
    }

    #[test]
    fn unchanged_pages_are_not_rewritten() {
        let dir = std::env::temp_dir().join(format!("fitplan-write-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("week.html");

        assert!(write_if_changed(&path, "<p>a</p>").unwrap());
        assert!(!write_if_changed(&path, "<p>a</p>").unwrap());
        assert!(write_if_changed(&path, "<p>b</p>").unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>b</p>");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn globs_expand_in_order() {
        let inputs = Input::expand("./tests/fixtures/*.json").unwrap();
        assert!(inputs.len() > 1);
        assert!(inputs.windows(2).all(|w| w[0] < w[1]));
        assert!(inputs
            .iter()
            .any(|input| matches!(input, Input::File(path) if path.ends_with("plan.json"))));
    }
}
