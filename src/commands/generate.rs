//! Generate test stubs for a Go source file

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use log::{debug, info};

use gounit::adapters::{GoParser, Goimports, PruneImports};
use gounit::api::{Handler, serve_interactive, serve_json};
use gounit::core::models::SelectionCriteria;
use gounit::core::ports::{ImportNormalizer, SourceParser};
use gounit::core::services::{Generator, SourceText, normalize};
use gounit::discovery::{SiblingFile, find_siblings};
use gounit::output::{GenerateResult, OutputMode};
use gounit::storage::TemplateStore;
use gounit::template::TemplateSet;
use gounit::{Error, paths};

use crate::cli::GenArgs;

/// Run `gen`
pub fn generate(args: GenArgs, mode: OutputMode) -> anyhow::Result<()> {
    let store = TemplateStore::open();
    let templates = TemplateSet::with_test(store.load(args.template.as_deref())?)?;

    let parser = GoParser;
    let normalizer: Box<dyn ImportNormalizer> = if args.goimports {
        Box::new(Goimports::default())
    } else {
        Box::new(PruneImports)
    };

    if args.json_stream || args.interactive {
        let handler = Handler::new(&parser, normalizer.as_ref(), templates);
        let served = if args.json_stream {
            serve_json(&handler, io::stdin().lock(), io::stdout().lock())?
        } else {
            serve_interactive(&handler, io::stdin().lock(), io::stdout().lock())?
        };
        debug!("served {served} request(s)");
        return Ok(());
    }

    let input = args
        .input
        .ok_or_else(|| Error::CommandLine("missing input file".to_string()))?;
    let output = args.output.unwrap_or_else(|| paths::default_output(&input));

    let source = read_input(&input, args.stdin)?;
    let existing = read_existing(&output)?;

    let package = parser.package_name(&source).unwrap_or_default();
    let siblings = find_siblings(&parser, &output, &package)?;
    let sibling_sources: Vec<SourceText<'_>> = siblings.iter().map(SiblingFile::as_source).collect();

    let criteria = SelectionCriteria::lines(args.lines)
        .with_names(args.functions)
        .with_all(args.all)
        .or_all();

    let generated = Generator::new(&parser, templates)
        .with_comment(args.comment)
        .generate(
            &criteria,
            SourceText::new(&input, &source),
            existing.as_deref().map(|text| SourceText::new(&output, text)),
            &sibling_sources,
        )?;
    let code = normalize(normalizer.as_ref(), &output, &generated)?;

    if args.stdout {
        print!("{code}");
        return Ok(());
    }

    if !generated.is_empty() {
        fs::write(&output, &code)
            .map_err(|e| {
                if existing.is_some() {
                    Error::WriteTest(e)
                } else {
                    Error::CreateOutput(e)
                }
            })
            .with_context(|| format!("writing {}", output.display()))?;
        info!("wrote {} test(s) to {}", generated.tests.len(), output.display());
    }

    GenerateResult {
        output: output.display().to_string(),
        tests: generated.tests,
    }
    .render(mode);
    Ok(())
}

/// Source text of the input file, or stdin when it is missing and allowed
fn read_input(path: &Path, use_stdin: bool) -> gounit::Result<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            if !use_stdin {
                return Err(Error::InputNotFound(path.to_path_buf()));
            }
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).map_err(Error::OpenInput)?;
            Ok(text)
        }
        Err(e) => Err(Error::OpenInput(e)),
    }
}

/// Current test file text, read fully before anything is written
fn read_existing(path: &Path) -> gounit::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::OpenOutput(e)),
    }
}
