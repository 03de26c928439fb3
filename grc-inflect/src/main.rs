use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use grc_inflect_lib::types::{AccentReport, Syllabification};
use grc_inflect_lib::writing::{normalize_with, romanize, NormalizeOptions};
use grc_inflect_lib::{
    detach_preposition, guess_declension_difficulty, guess_difficulty,
    is_irregular_comparative, locate_accent, move_accent_to, normalize, output, syllabify,
    Degree, Dialect, VerbForm,
};
use serde_json::{json, Value};
use tracing::{debug, Level};

#[derive(Parser)]
#[command(
    name = "grc-inflect",
    about = "Ancient Greek syllabification, accentuation and inflection difficulty"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Language variety: mycenaean, epic, attic, koine, medieval, modern.
    #[arg(long, global = true, default_value = "epic")]
    dialect: String,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,

    /// Log more (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

// Every subcommand reads its fields from stdin, one whitespace-separated
// record per line, when the word is omitted.
#[derive(Subcommand)]
enum Command {
    /// Normalized and romanized spelling.
    Normalize {
        word: Option<String>,
        /// Keep accents as ! and ~ markers (phonetic spelling).
        #[arg(long, conflicts_with = "stem")]
        accents: bool,
        /// Drop accents entirely (the spelling stems are compared in).
        #[arg(long)]
        stem: bool,
    },
    /// Split into syllables.
    Syllabify { word: Option<String> },
    /// Locate the accent, or move it with --to.
    Accent {
        word: Option<String>,
        /// Syllable to accent, counted from the end (0 = ultima).
        #[arg(long)]
        to: Option<usize>,
        /// Verb tag, used to tell optative -αι/-οι from the rest.
        #[arg(long)]
        tag: Option<String>,
    },
    /// Verb difficulty: WORD LEMMA TAG.
    Verb {
        word: Option<String>,
        lemma: Option<String>,
        tag: Option<String>,
    },
    /// Declension difficulty: WORD LEMMA TAG.
    Noun {
        word: Option<String>,
        lemma: Option<String>,
        tag: Option<String>,
    },
    /// Irregular comparative or superlative: WORD LEMMA TAG (degree in slot 8).
    Compare {
        word: Option<String>,
        lemma: Option<String>,
        tag: Option<String>,
    },
    /// Split a prepositional prefix off a compound verb: WORD TAG.
    Detach {
        word: Option<String>,
        tag: Option<String>,
        #[arg(long)]
        lemma: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let dialect: Dialect = cli
        .dialect
        .parse()
        .with_context(|| format!("invalid --dialect {}", cli.dialect))?;
    debug!(%dialect, "configured");

    let args: Vec<Option<String>> = match &cli.command {
        Command::Normalize { word, .. }
        | Command::Syllabify { word }
        | Command::Accent { word, .. } => vec![word.clone()],
        Command::Verb { word, lemma, tag }
        | Command::Noun { word, lemma, tag }
        | Command::Compare { word, lemma, tag } => {
            vec![word.clone(), lemma.clone(), tag.clone()]
        }
        Command::Detach { word, tag, .. } => vec![word.clone(), tag.clone()],
    };

    if args[0].is_some() {
        let fields: Vec<String> = args.into_iter().flatten().collect();
        return emit(&run(&cli, dialect, &fields)?, cli.pretty);
    }
    let stdin = io::stdin();
    for (n, line) in stdin.lock().lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        let fields: Vec<String> = line.split_whitespace().map(String::from).collect();
        if fields.is_empty() {
            continue;
        }
        let value = run(&cli, dialect, &fields)
            .with_context(|| format!("line {}: {}", n + 1, line.trim()))?;
        emit(&value, cli.pretty)?;
    }
    Ok(())
}

fn emit(value: &Value, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    println!("{}", json.context("JSON serialization failed")?);
    Ok(())
}

fn field<'a>(fields: &'a [String], i: usize, name: &str) -> Result<&'a str> {
    fields
        .get(i)
        .map(String::as_str)
        .with_context(|| format!("missing {name}"))
}

fn run(cli: &Cli, dialect: Dialect, fields: &[String]) -> Result<Value> {
    let word = field(fields, 0, "word")?;
    let value = match &cli.command {
        Command::Normalize { accents, stem, .. } => normalize_record(word, *accents, *stem),
        Command::Syllabify { .. } => {
            let syllables = syllabify(word, dialect);
            serde_json::to_value(Syllabification {
                word: word.to_string(),
                hyphenated: output::to_hyphenated(&syllables),
                syllables,
            })?
        }
        Command::Accent { to, tag, .. } => {
            let form = tag.as_deref().map(VerbForm::from_tag).transpose()?;
            let moved = match to {
                Some(k) => Some(move_accent_to(word, *k, form.as_ref(), dialect)?),
                None => None,
            };
            serde_json::to_value(AccentReport {
                word: word.to_string(),
                accent: locate_accent(word, dialect),
                moved,
            })?
        }
        Command::Verb { .. } => {
            let lemma = field(fields, 1, "lemma")?;
            let form = VerbForm::from_tag(field(fields, 2, "tag")?)?;
            let mut value = serde_json::to_value(guess_difficulty(word, lemma, &form, dialect))?;
            value["description"] = json!(output::describe_verb_form(&form));
            value
        }
        Command::Noun { .. } => {
            let lemma = field(fields, 1, "lemma")?;
            let tag = field(fields, 2, "tag")?;
            let mut value = serde_json::to_value(guess_declension_difficulty(word, lemma, tag))?;
            if let Some((long, _)) = output::describe_declension(tag) {
                value["description"] = json!(long);
            }
            value
        }
        Command::Compare { .. } => {
            let lemma = field(fields, 1, "lemma")?;
            let tag = field(fields, 2, "tag")?;
            let degree = tag
                .chars()
                .nth(8)
                .and_then(Degree::from_code)
                .with_context(|| format!("tag {tag} has no comparative or superlative degree"))?;
            json!({
                "word": word,
                "lemma": lemma,
                "degree": degree,
                "irregular": is_irregular_comparative(word, lemma, degree),
            })
        }
        Command::Detach { lemma, .. } => {
            let form = VerbForm::from_tag(field(fields, 1, "tag")?)?;
            let detached = detach_preposition(word, lemma.as_deref(), &form, dialect)?;
            serde_json::to_value(detached)?
        }
    };
    Ok(value)
}

fn normalize_record(word: &str, accents: bool, stem: bool) -> Value {
    let normalized = if accents {
        normalize_with(word, &NormalizeOptions::phonetic())
    } else if stem {
        normalize_with(word, &NormalizeOptions::stem())
    } else {
        normalize(word)
    };
    json!({
        "word": word,
        "normalized": normalized,
        "romanized": romanize(word),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("grc-inflect").chain(args.iter().copied()))
    }

    fn fields(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_modes() {
        assert_eq!(normalize_record("ῥέω", false, false)["normalized"], "hρέω");
        assert_eq!(normalize_record("ῥέω", true, false)["normalized"], "hρε!ω");
        assert_eq!(normalize_record("ῥέω", false, true)["normalized"], "hρεω");
    }

    #[test]
    fn test_normalize_defaults_to_kept_accents() {
        let c = cli(&["normalize", "δαμᾷ"]);
        let v = run(&c, Dialect::epic(), &fields(&["δαμᾷ"])).unwrap();
        assert_eq!(v["normalized"], "δαμᾶι");
    }

    #[test]
    fn test_compare_reads_degree_from_tag() {
        let c = cli(&["compare"]);
        let v = run(&c, Dialect::epic(), &fields(&["ἀμείνονες", "ἀγαθός", "a-p---mnc"])).unwrap();
        assert_eq!(v["degree"], "comparative");
        assert_eq!(v["irregular"], true);
        assert!(run(&c, Dialect::epic(), &fields(&["ἀγαθός", "ἀγαθός", "a-s---mn-"])).is_err());
    }
}
