//! File input/output for the optimizer: candidate tables, archetype lists,
//! and result serialization.
//!
//! Candidates arrive either as the scoring pipeline's CSV table or as a JSON
//! array of records. The CSV reader is intentionally small: it validates the
//! header against the required score columns and tolerates blank or
//! unparseable numeric cells (they become NaN and are sanitized by the
//! pool). Quoted fields with embedded commas and doubled quotes are
//! supported; multi-line fields are not.

use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{BufReader, BufWriter, Write as _},
    path::Path,
};

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use serde::Serialize;
use teamforge_model::{Archetype, CandidateRecord, ConfigurationError, Weightings};
use teamforge_optimizer::OptimizedTeam;

/// Score columns the candidate CSV must provide.
const REQUIRED_COLUMNS: [&str; 4] = [
    "technical_score",
    "education_score",
    "soft_skills_score",
    "normalized_overall_score",
];

/// Which per-archetype files `save_results` writes.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub(crate) enum OutputFormat {
    /// Only `<name>_details.json`.
    Json,
    /// Only `<name>_team.csv`.
    Csv,
    /// Both files.
    #[default]
    All,
}

impl OutputFormat {
    fn includes_json(self) -> bool {
        matches!(self, Self::Json | Self::All)
    }

    fn includes_csv(self) -> bool {
        matches!(self, Self::Csv | Self::All)
    }
}

/// Loads candidate records from a `.csv` or `.json` file, dispatching on
/// the extension.
pub(crate) fn load_candidates(path: &Path) -> anyhow::Result<Vec<CandidateRecord>> {
    if path.extension().is_some_and(|ext| ext == "csv") {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read candidates file: {}", path.display()))?;
        parse_candidates_csv(&contents)
            .with_context(|| format!("Failed to parse candidates file: {}", path.display()))
    } else {
        let file = File::open(path)
            .with_context(|| format!("Failed to open candidates file: {}", path.display()))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse candidates file: {}", path.display()))
    }
}

/// Loads the archetype list from a JSON file.
pub(crate) fn load_archetypes(path: &Path) -> anyhow::Result<Vec<Archetype>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open archetypes file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse archetypes file: {}", path.display()))
}

fn parse_candidates_csv(contents: &str) -> anyhow::Result<Vec<CandidateRecord>> {
    let mut lines = contents.lines().filter(|line| !line.trim().is_empty());
    let header = lines.next().ok_or(ConfigurationError::EmptyCandidatePool)?;
    let columns = split_row(header);

    let column_index = |name: &str| {
        columns
            .iter()
            .position(|column| column == name)
            .ok_or_else(|| ConfigurationError::MissingScoreColumn {
                column: name.to_owned(),
            })
    };
    let technical = column_index(REQUIRED_COLUMNS[0])?;
    let education = column_index(REQUIRED_COLUMNS[1])?;
    let soft_skills = column_index(REQUIRED_COLUMNS[2])?;
    let overall = column_index(REQUIRED_COLUMNS[3])?;
    let name = columns.iter().position(|column| column == "name");

    let records = lines
        .map(|line| {
            let fields = split_row(line);
            let score = |index: usize| {
                fields
                    .get(index)
                    .map(|field| field.trim())
                    .filter(|field| !field.is_empty())
                    .and_then(|field| field.parse::<f64>().ok())
                    .unwrap_or(f64::NAN)
            };
            CandidateRecord {
                name: name
                    .and_then(|index| fields.get(index))
                    .filter(|field| !field.is_empty())
                    .cloned(),
                technical_score: score(technical),
                education_score: score(education),
                soft_skills_score: score(soft_skills),
                normalized_overall_score: score(overall),
            }
        })
        .collect();
    Ok(records)
}

/// Splits one CSV row, honoring double-quoted fields with `""` escapes.
fn split_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

#[derive(Debug, Serialize)]
struct SummaryFile<'a> {
    generated_at: DateTime<Utc>,
    seed: u64,
    archetypes: Vec<SummaryEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct SummaryEntry<'a> {
    archetype_name: &'a str,
    description: &'a str,
    weightings: &'a Weightings,
    fitness: f64,
    team_size: usize,
}

/// Writes `optimization_summary.json` plus per-archetype team files into
/// `output_dir`, creating it if needed.
pub(crate) fn save_results(
    output_dir: &Path,
    results: &BTreeMap<String, OptimizedTeam>,
    seed: u64,
    format: OutputFormat,
) -> anyhow::Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    let summary = SummaryFile {
        generated_at: Utc::now(),
        seed,
        archetypes: results
            .iter()
            .map(|(name, team)| SummaryEntry {
                archetype_name: name,
                description: &team.archetype.description,
                weightings: &team.archetype.weightings,
                fitness: team.fitness,
                team_size: team.team_indices.len(),
            })
            .collect(),
    };
    save_json(&output_dir.join("optimization_summary.json"), &summary)?;

    for (name, team) in results {
        if format.includes_json() {
            save_json(&output_dir.join(format!("{name}_details.json")), team)?;
        }
        if format.includes_csv() {
            write_team_csv(&output_dir.join(format!("{name}_team.csv")), &team.team_members)?;
        }
    }
    Ok(())
}

fn save_json<T>(path: &Path, value: &T) -> anyhow::Result<()>
where
    T: Serialize,
{
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    writer.flush()?;
    Ok(())
}

fn write_team_csv(path: &Path, members: &[CandidateRecord]) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    writeln!(
        writer,
        "name,technical_score,education_score,soft_skills_score,normalized_overall_score"
    )?;
    for member in members {
        writeln!(
            writer,
            "{},{},{},{},{}",
            csv_field(member.name.as_deref().unwrap_or_default()),
            member.technical_score,
            member.education_score,
            member.soft_skills_score,
            member.normalized_overall_score,
        )?;
    }
    writer.flush()?;
    Ok(())
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_csv() {
        let csv = "name,technical_score,education_score,soft_skills_score,normalized_overall_score\n\
                   Ada,0.9,0.04,0.8,0.85\n\
                   Grace,0.7,0.02,0.6,0.65\n";
        let records = parse_candidates_csv(csv).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name.as_deref(), Some("Ada"));
        assert_eq!(records[0].technical_score, 0.9);
        assert_eq!(records[1].normalized_overall_score, 0.65);
    }

    #[test]
    fn column_order_does_not_matter() {
        let csv = "normalized_overall_score,name,soft_skills_score,education_score,technical_score\n\
                   0.5,Ada,0.4,0.01,0.3\n";
        let records = parse_candidates_csv(csv).unwrap();
        assert_eq!(records[0].technical_score, 0.3);
        assert_eq!(records[0].normalized_overall_score, 0.5);
    }

    #[test]
    fn missing_score_column_is_a_configuration_error() {
        let csv = "name,technical_score,soft_skills_score,normalized_overall_score\nAda,0.9,0.8,0.85\n";
        let err = parse_candidates_csv(csv).unwrap_err();
        let config = err.downcast::<ConfigurationError>().unwrap();
        assert_eq!(
            config,
            ConfigurationError::MissingScoreColumn {
                column: "education_score".to_owned(),
            }
        );
    }

    #[test]
    fn blank_and_unparseable_cells_become_nan() {
        let csv = "name,technical_score,education_score,soft_skills_score,normalized_overall_score\n\
                   Ada,,oops,0.8,0.85\n";
        let records = parse_candidates_csv(csv).unwrap();
        assert!(records[0].technical_score.is_nan());
        assert!(records[0].education_score.is_nan());
        assert_eq!(records[0].soft_skills_score, 0.8);
    }

    #[test]
    fn quoted_fields_keep_commas_and_quotes() {
        let row = r#""Lovelace, Ada","0.9","said ""hi""",plain"#;
        assert_eq!(
            split_row(row),
            vec![
                "Lovelace, Ada".to_owned(),
                "0.9".to_owned(),
                r#"said "hi""#.to_owned(),
                "plain".to_owned(),
            ]
        );
    }

    #[test]
    fn csv_field_round_trips_through_split_row() {
        let tricky = r#"Lovelace, "Ada""#;
        let encoded = csv_field(tricky);
        assert_eq!(split_row(&encoded), vec![tricky.to_owned()]);
    }

    #[test]
    fn empty_csv_reports_empty_pool() {
        let err = parse_candidates_csv("").unwrap_err();
        let config = err.downcast::<ConfigurationError>().unwrap();
        assert_eq!(config, ConfigurationError::EmptyCandidatePool);
    }

    #[test]
    fn output_format_parses_lowercase_names() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("all".parse::<OutputFormat>().unwrap(), OutputFormat::All);
    }
}
