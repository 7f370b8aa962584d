use anyhow::{Context, Result};
use retrieval::report::render;
use retrieval::{evaluate, AggregateResult, Corpus, Relevance};
use serde::Deserialize;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// On-disk record layout for `.json`/`.jsonl` corpora.
#[derive(Debug, Deserialize)]
struct RawRecord {
    query_id: i64,
    relevance: i64,
    text: String,
}

/// Load a judged corpus from a file or a directory of corpus files.
///
/// Directories are walked recursively; `.json`, `.jsonl` and `.txt` files are
/// ingested in sorted path order so record indices are reproducible.
pub fn load_corpus(input: &Path) -> Result<Corpus> {
    let mut corpus = Corpus::new();
    if input.is_dir() {
        let mut files: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(input).into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() {
                if let Some(ext) = p.extension().and_then(|s| s.to_str()) {
                    if matches!(ext, "json" | "jsonl" | "txt") {
                        files.push(p.to_path_buf());
                    }
                }
            }
        }
        files.sort();
        for file in files {
            ingest_file(&mut corpus, &file)?;
        }
    } else {
        ingest_file(&mut corpus, input)?;
    }
    Ok(corpus)
}

/// Load, evaluate, and write the rendered report to `output`. When
/// `json_output` is given, the full result is also dumped as pretty JSON.
pub fn run(input: &Path, output: &Path, json_output: Option<&Path>) -> Result<AggregateResult> {
    let corpus = load_corpus(input)?;
    tracing::info!(records = corpus.len(), "corpus loaded");

    let result = evaluate(&corpus);
    fs::write(output, render(&corpus, &result))
        .with_context(|| format!("write report to {}", output.display()))?;
    if let Some(path) = json_output {
        let json = serde_json::to_string_pretty(&result)?;
        fs::write(path, json).with_context(|| format!("write json to {}", path.display()))?;
    }
    tracing::info!(score = result.score, output = %output.display(), "report written");
    Ok(result)
}

fn ingest_file(corpus: &mut Corpus, file: &Path) -> Result<()> {
    match file.extension().and_then(|s| s.to_str()) {
        Some("jsonl") => ingest_jsonl(corpus, file),
        Some("json") => ingest_json(corpus, file),
        _ => ingest_plain(corpus, file),
    }
}

fn ingest_jsonl(corpus: &mut Corpus, file: &Path) -> Result<()> {
    let f = File::open(file).with_context(|| format!("open {}", file.display()))?;
    let reader = BufReader::new(f);
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record: RawRecord = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}", file.display(), line_no + 1))?;
        append_raw(corpus, record)
            .with_context(|| format!("{}:{}", file.display(), line_no + 1))?;
    }
    Ok(())
}

fn ingest_json(corpus: &mut Corpus, file: &Path) -> Result<()> {
    let f = File::open(file).with_context(|| format!("open {}", file.display()))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(f))?;
    match json {
        serde_json::Value::Array(arr) => {
            for v in arr {
                let record: RawRecord = serde_json::from_value(v)?;
                append_raw(corpus, record).with_context(|| format!("{}", file.display()))?;
            }
        }
        serde_json::Value::Object(_) => {
            let record: RawRecord = serde_json::from_value(json)?;
            append_raw(corpus, record).with_context(|| format!("{}", file.display()))?;
        }
        _ => {}
    }
    Ok(())
}

/// Historical plain-text layout: one record per line, `<qid> <rel> <text…>`.
fn ingest_plain(corpus: &mut Corpus, file: &Path) -> Result<()> {
    let f = File::open(file).with_context(|| format!("open {}", file.display()))?;
    let reader = BufReader::new(f);
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = parse_plain_line(&line)
            .with_context(|| format!("{}:{}", file.display(), line_no + 1))?;
        append_raw(corpus, record)
            .with_context(|| format!("{}:{}", file.display(), line_no + 1))?;
    }
    Ok(())
}

fn parse_plain_line(line: &str) -> Result<RawRecord> {
    let line = line.trim();
    let (qid, rest) = line
        .split_once(char::is_whitespace)
        .context("expected `<qid> <rel> <text>`")?;
    let rest = rest.trim_start();
    let (rel, text) = rest
        .split_once(char::is_whitespace)
        .unwrap_or((rest, ""));
    Ok(RawRecord {
        query_id: qid.parse().with_context(|| format!("query id `{qid}`"))?,
        relevance: rel.parse().with_context(|| format!("relevance label `{rel}`"))?,
        text: text.trim_start().to_string(),
    })
}

fn append_raw(corpus: &mut Corpus, record: RawRecord) -> Result<()> {
    let relevance = Relevance::try_from(record.relevance)?;
    corpus.append(record.query_id, relevance, record.text);
    Ok(())
}
