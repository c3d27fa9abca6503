use anyhow::{Context, Result, bail};
use promptlab_config::Config;
use promptlab_engine::{
    ClassNames, DecorationEngine, DecorationOptions, DocSnapshot, decorate::snapshot, template,
};
use std::{
    env,
    io::stdout,
    path::{Path, PathBuf},
    process,
};

mod io;
mod render;

const USAGE: &str = "Usage: promptlab-cli [--config <path>] <decorate|preview|fill> <file> \
[--line <n>] [--var <name=value>]... [--value <value>]...";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    /// Print the decoration set as one row per decoration.
    Decorate { file: PathBuf },
    /// Render the template in the terminal, markers visible on `line` only.
    Preview { file: PathBuf, line: Option<usize> },
    /// Print the template with its `{{name}}` placeholders filled in.
    Fill {
        file: PathBuf,
        named: Vec<(String, String)>,
        values: Vec<String>,
    },
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    config: Option<String>,
    command: Command,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut config = None;
    let mut line = None;
    let mut named = Vec::new();
    let mut values = Vec::new();
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                config = Some(iter.next().context("--config needs a path")?.clone());
            }
            "--line" => {
                let value = iter.next().context("--line needs a line number")?;
                line = Some(
                    value
                        .parse::<usize>()
                        .with_context(|| format!("invalid line number '{value}'"))?,
                );
            }
            "--var" => {
                let pair = iter.next().context("--var needs name=value")?;
                let (name, value) = pair
                    .split_once('=')
                    .with_context(|| format!("invalid variable '{pair}', expected name=value"))?;
                named.push((name.to_string(), value.to_string()));
            }
            "--value" => {
                values.push(iter.next().context("--value needs a value")?.clone());
            }
            _ => positional.push(arg.as_str()),
        }
    }

    let command = match positional.as_slice() {
        ["decorate", file] => Command::Decorate {
            file: PathBuf::from(*file),
        },
        ["preview", file] => Command::Preview {
            file: PathBuf::from(*file),
            line,
        },
        ["fill", file] => Command::Fill {
            file: PathBuf::from(*file),
            named,
            values,
        },
        _ => bail!("{USAGE}"),
    };

    Ok(Args { config, command })
}

/// Orders the values for `names`: by name when any `--var` was given,
/// otherwise the positional `--value`s as they are.
fn fill_values(
    names: &[&str],
    named: &[(String, String)],
    values: &[String],
) -> Result<Vec<String>> {
    if named.is_empty() {
        return Ok(values.to_vec());
    }
    for (name, _) in named {
        if !names.contains(&name.as_str()) {
            log::warn!("template has no {{{{{name}}}}} placeholder");
        }
    }
    names
        .iter()
        .map(|name| {
            named
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, value)| value.clone())
                .with_context(|| format!("no value given for {{{{{name}}}}}"))
        })
        .collect()
}

fn load_options(config: Option<&str>) -> Result<DecorationOptions> {
    let loaded = match config {
        Some(path) => Config::load_from_str_path(path)?,
        None => Config::load()?,
    };
    let config = loaded.unwrap_or_default();
    log::debug!("decoration config: {:?}", config.decorations);

    Ok(DecorationOptions {
        classes: ClassNames::new(config.decorations.class_prefix),
        bullet: config.decorations.bullet,
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let args = match parse_args(&args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    let options = load_options(args.config.as_deref())?;
    let engine = DecorationEngine::new(options);

    match args.command {
        Command::Decorate { file } => {
            let doc = DocSnapshot::new(io::read_template(&file)?);
            let set = engine.recompute(&doc);
            for row in snapshot::normalize(&doc, &set).decorations {
                let display = row.display.map(|d| format!("\t{d}")).unwrap_or_default();
                println!(
                    "{}\t{}\t{}..{}\t{}{}",
                    row.line, row.kind, row.from, row.to, row.class, display
                );
            }
        }
        Command::Preview { file, line } => {
            let doc = DocSnapshot::new(io::read_template(&file)?);
            let set = engine.recompute(&doc);
            log::info!(
                "{}: {} lines, {} decorations",
                file.display(),
                doc.line_count(),
                set.len()
            );
            render::print_preview(
                &mut stdout(),
                &doc,
                &set,
                &engine.options().classes,
                line,
            )?;
        }
        Command::Fill {
            file,
            named,
            values,
        } => {
            print!("{}", fill(&file, &named, &values)?);
        }
    }

    Ok(())
}

fn fill(file: &Path, named: &[(String, String)], values: &[String]) -> Result<String> {
    let text = io::read_template(file)?;
    let names = template::find_variables(&text);
    let values = fill_values(&names, named, values)?;
    if values.is_empty() && !names.is_empty() {
        log::warn!("{} placeholders left unfilled", names.len());
    }
    Ok(template::replace_variables(&text, values.as_slice()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_decorate() {
        let parsed = parse_args(&args(&["decorate", "a.md"])).unwrap();
        assert_eq!(
            parsed,
            Args {
                config: None,
                command: Command::Decorate {
                    file: PathBuf::from("a.md")
                },
            }
        );
    }

    #[test]
    fn parses_preview_with_line_and_config() {
        let parsed =
            parse_args(&args(&["--config", "~/p.toml", "preview", "a.md", "--line", "3"])).unwrap();
        assert_eq!(parsed.config.as_deref(), Some("~/p.toml"));
        assert_eq!(
            parsed.command,
            Command::Preview {
                file: PathBuf::from("a.md"),
                line: Some(3)
            }
        );
    }

    #[test]
    fn parses_fill_variables() {
        let parsed = parse_args(&args(&[
            "fill", "a.md", "--var", "topic=rust", "--var", "tone=a=b", "--value", "x",
        ]))
        .unwrap();
        assert_eq!(
            parsed.command,
            Command::Fill {
                file: PathBuf::from("a.md"),
                named: vec![
                    ("topic".to_string(), "rust".to_string()),
                    ("tone".to_string(), "a=b".to_string()),
                ],
                values: vec!["x".to_string()],
            }
        );
        assert!(parse_args(&args(&["fill", "a.md", "--var", "novalue"])).is_err());
    }

    #[test]
    fn named_values_follow_placeholder_order() {
        let named = vec![
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
        ];
        assert_eq!(fill_values(&["a", "b"], &named, &[]).unwrap(), vec!["1", "2"]);
        assert!(fill_values(&["a", "c"], &named, &[]).is_err());
    }

    #[test]
    fn fill_reads_and_cycles_values() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("prompt.md");
        std::fs::write(&path, "# {{role}}\n{{task}} for {{role}}, then {{extra}}\n").unwrap();

        let out = fill(&path, &[], &["Reviewer".to_string(), "Check".to_string()]).unwrap();
        assert_eq!(out, "# Reviewer\nCheck for Reviewer, then Reviewer\n");
    }

    #[test]
    fn rejects_unknown_command_and_bad_line() {
        assert!(parse_args(&args(&["render", "a.md"])).is_err());
        assert!(parse_args(&args(&["preview", "a.md", "--line", "x"])).is_err());
        assert!(parse_args(&args(&[])).is_err());
    }
}
