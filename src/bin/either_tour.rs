use colored::Colorize;
use either_fp::{
    ap, chain, flatten, fold, from_future, get_or_else, is_left, is_right, left, map, partition,
    right, Either, EitherFutureExt,
};
use serde::Deserialize;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tokio::runtime::Runtime;

// =============================================================================
// Milestone 1: Configuration
// =============================================================================

#[derive(Error, Debug)]
pub enum TourError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid tour config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Construction,
    Functor,
    Applicative,
    Flatten,
    Fold,
    Interop,
    Collect,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Construction,
        Section::Functor,
        Section::Applicative,
        Section::Flatten,
        Section::Fold,
        Section::Interop,
        Section::Collect,
    ];

    fn title(self) -> &'static str {
        match self {
            Section::Construction => "Construction & Predicates",
            Section::Functor => "Functor: map",
            Section::Applicative => "Applicative: ap",
            Section::Flatten => "Flatten & Chain",
            Section::Fold => "Fold & getOrElse",
            Section::Interop => "Future Interop",
            Section::Collect => "Collections",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TourConfig {
    pub sections: Vec<Section>,
    pub color: bool,
    /// Simulated latency of the futures in the interop section.
    pub delay_ms: u64,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            sections: Section::ALL.to_vec(),
            color: true,
            delay_ms: 10,
        }
    }
}

impl TourConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, TourError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, TourError> {
        let content = fs::read_to_string(path).map_err(|source| TourError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

// =============================================================================
// Milestone 2: Rendering
// =============================================================================

fn show<E: Display, A: Display>(either: &Either<E, A>) -> String {
    match either {
        Either::Left(_) => either.to_string().red().to_string(),
        Either::Right(_) => either.to_string().green().to_string(),
    }
}

fn line(label: &str, value: impl Display) -> String {
    format!("  {:<40} {}", label, value)
}

// =============================================================================
// Milestone 3: Sections
// =============================================================================

pub struct Tour {
    config: TourConfig,
    runtime: Runtime,
}

impl Tour {
    pub fn new(config: TourConfig) -> Result<Self, TourError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .map_err(TourError::Runtime)?;
        Ok(Self { config, runtime })
    }

    pub fn run(&self) -> Vec<String> {
        let mut out = Vec::new();
        for &section in &self.config.sections {
            out.push(format!("== {} ==", section.title()).bold().to_string());
            out.extend(self.section(section));
        }
        out
    }

    pub fn section(&self, section: Section) -> Vec<String> {
        match section {
            Section::Construction => construction(),
            Section::Functor => functor(),
            Section::Applicative => applicative(),
            Section::Flatten => flattening(),
            Section::Fold => folding(),
            Section::Interop => self.interop(),
            Section::Collect => collections(),
        }
    }

    fn interop(&self) -> Vec<String> {
        let delay = Duration::from_millis(self.config.delay_ms);

        let resolved = self.runtime.block_on(from_future(async move {
            tokio::time::sleep(delay).await;
            Ok::<_, String>("ok")
        }));
        let rejected = self.runtime.block_on(
            async move {
                tokio::time::sleep(delay).await;
                Err::<&str, _>("bad".to_string())
            }
            .into_either(),
        );

        vec![
            line("fromPromise(resolve \"ok\")", show(&resolved)),
            line("fromPromise(reject \"bad\")", show(&rejected)),
        ]
    }
}

fn construction() -> Vec<String> {
    let ok: Either<String, i32> = right(1);
    let err: Either<String, i32> = left("boom".to_string());
    vec![
        line("right(1)", show(&ok)),
        line("left(\"boom\")", show(&err)),
        line("isRight(right(1))", is_right(&ok)),
        line("isLeft(right(1))", is_left(&ok)),
    ]
}

fn functor() -> Vec<String> {
    let double = map(|x: i32| x * 2);
    vec![
        line("map(x => x * 2)(right(21))", show(&double(right::<String, _>(21)))),
        line(
            "map(x => x * 2)(left(\"e\"))",
            show(&double(left("e".to_string()))),
        ),
    ]
}

fn applicative() -> Vec<String> {
    let fab: Either<&str, fn(i32) -> i32> = right(|x| x * 2);
    let fn_err: Either<&str, fn(i32) -> i32> = left("fnErr");
    vec![
        line("ap(right(5))(right(x => x * 2))", show(&ap(right(5))(fab))),
        line(
            "ap(left(\"valErr\"))(left(\"fnErr\"))",
            show(&ap(left("valErr"))(fn_err)),
        ),
    ]
}

fn flattening() -> Vec<String> {
    let nested: Either<&str, Either<&str, i32>> = right(right(7));
    let outer: Either<&str, Either<&str, i32>> = left("e");
    let halve = chain(|n: i32| {
        if n % 2 == 0 {
            right(n / 2)
        } else {
            left("odd")
        }
    });
    vec![
        line("flatten(right(right(7)))", show(&flatten(nested))),
        line("flatten(left(\"e\"))", show(&flatten(outer))),
        line("chain(halve)(right(8))", show(&halve(right(8)))),
        line("chain(halve)(right(7))", show(&halve(right(7)))),
    ]
}

fn folding() -> Vec<String> {
    let describe = fold(|_: &str| "L", |_: i32| "R");
    let or_zero = get_or_else(|_: &str| 0);
    vec![
        line("fold(L, R)(right(1))", describe(right(1))),
        line("fold(L, R)(left(\"x\"))", describe(left("x"))),
        line("getOrElse(() => 0)(left(\"err\"))", or_zero(left("err"))),
        line("getOrElse(() => 0)(right(42))", or_zero(right(42))),
    ]
}

fn collections() -> Vec<String> {
    let inputs = ["1", "two", "3"];
    let parsed = || {
        inputs
            .iter()
            .map(|s| Either::from(s.parse::<i32>().map_err(|_| format!("bad: {s}"))))
    };
    let (errors, values) = partition(parsed());
    let all: Either<String, Vec<i32>> = parsed().collect();
    vec![
        line("partition errors", format!("{errors:?}")),
        line("partition values", format!("{values:?}")),
        line(
            "collect",
            all.fold(|e| format!("Left({e})").red(), |v| format!("Right({v:?})").green()),
        ),
    ]
}

// =============================================================================
// Main
// =============================================================================

fn main() -> Result<(), TourError> {
    let config = match std::env::args().nth(1) {
        Some(path) => TourConfig::load(Path::new(&path))?,
        None => TourConfig::default(),
    };
    colored::control::set_override(config.color);

    let tour = Tour::new(config)?;
    for text in tour.run() {
        println!("{}", text);
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn plain_tour(sections: Vec<Section>) -> Tour {
        colored::control::set_override(false);
        let config = TourConfig {
            sections,
            color: false,
            delay_ms: 0,
        };
        Tour::new(config).unwrap()
    }

    #[test]
    fn test_default_config_runs_everything() {
        let config = TourConfig::default();
        assert_eq!(config.sections, Section::ALL.to_vec());
        assert!(config.color);
    }

    #[test]
    fn test_parse_partial_config() {
        let config = TourConfig::from_toml_str("sections = [\"fold\", \"interop\"]").unwrap();
        assert_eq!(config.sections, vec![Section::Fold, Section::Interop]);
        assert!(config.color);
        assert_eq!(config.delay_ms, 10);
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let result = TourConfig::from_toml_str("sections = [\"monoid\"]");
        assert!(matches!(result, Err(TourError::Parse(_))));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = TourConfig::from_toml_str("colour = false");
        assert!(matches!(result, Err(TourError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "color = false").unwrap();
        writeln!(file, "delay_ms = 0").unwrap();

        let config = TourConfig::load(file.path()).unwrap();
        assert!(!config.color);
        assert_eq!(config.delay_ms, 0);
        assert_eq!(config.sections.len(), Section::ALL.len());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = TourConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, TourError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }

    #[test]
    fn test_interop_section_settles_both_ways() {
        let tour = plain_tour(vec![Section::Interop]);
        let lines = tour.section(Section::Interop);
        assert!(lines[0].ends_with("Right(ok)"));
        assert!(lines[1].ends_with("Left(bad)"));
    }

    #[test]
    fn test_applicative_section_shows_left_bias() {
        let tour = plain_tour(vec![Section::Applicative]);
        let lines = tour.section(Section::Applicative);
        assert!(lines[0].ends_with("Right(10)"));
        assert!(lines[1].ends_with("Left(fnErr)"));
    }

    #[test]
    fn test_run_prints_a_heading_per_section() {
        let tour = plain_tour(vec![Section::Construction, Section::Fold]);
        let lines = tour.run();
        let headings: Vec<_> = lines.iter().filter(|l| l.starts_with("==")).collect();
        assert_eq!(headings.len(), 2);
        assert!(lines.iter().any(|l| l.ends_with("Right(1)")));
    }
}
