// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Diagen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Diagen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagen CLI entrypoint.
//!
//! Reads text or code from a file (or stdin), asks the model for a diagram and prints the
//! validated result as JSON on stdout.
//!
//! Use `--validate` to run a saved model reply through the validator without calling the API.

use std::error::Error;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing_subscriber::EnvFilter;

use diagen::bridge::DiagramRequest;
use diagen::model::{
    response_json_schema, smart_response_json_schema, DiagramModule, DiagramStyle, DiagramType,
    DEFAULT_PROMPT_MERMAID,
};
use diagen::validate::{
    parse_diagram_payload, parse_mermaid_response, parse_smart_response, ValidationMode,
};
use diagen::{BridgeConfig, DiagramBridge};

const DEFAULT_LOG_FILTER: &str = "warn";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--code] [--simple] [--type <name>] [<input-file>]\n  {program} [--code] --smart [<input-file>]\n  {program} --validate [--code] [--type <name> | --smart] [--shape-only] [<reply-file>]\n  {program} --schema [--smart]\n  {program} --list-types\n\nInput is read from stdin when no file is given; empty input falls back to a built-in example.\n--type takes a display name such as \"Flowchart\" or \"Mermaid Mind Map\" (see --list-types).\n--validate checks a saved model reply instead of calling the API.\n\nThe API key is read from API_KEY (or GEMINI_API_KEY). Set RUST_LOG for diagnostics."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    code: bool,
    simple: bool,
    smart: bool,
    validate: bool,
    shape_only: bool,
    schema: bool,
    list_types: bool,
    diagram_type: Option<DiagramType>,
    input_file: Option<String>,
}

impl CliOptions {
    fn module(&self) -> DiagramModule {
        if self.code {
            DiagramModule::Code
        } else {
            DiagramModule::Text
        }
    }

    fn style(&self) -> DiagramStyle {
        if self.simple {
            DiagramStyle::Simple
        } else {
            DiagramStyle::Standard
        }
    }

    fn diagram_type(&self) -> DiagramType {
        self.diagram_type.unwrap_or(match self.module() {
            DiagramModule::Text => DiagramType::Flowchart,
            DiagramModule::Code => DiagramType::ControlFlowGraph,
        })
    }

    fn request(&self) -> DiagramRequest {
        if self.smart {
            DiagramRequest::Smart {
                module: self.module(),
            }
        } else {
            DiagramRequest::Manual {
                ty: self.diagram_type(),
                module: self.module(),
                style: self.style(),
            }
        }
    }

    fn default_input(&self) -> &'static str {
        if !self.smart && self.diagram_type().is_mermaid() {
            DEFAULT_PROMPT_MERMAID
        } else {
            self.module().default_prompt()
        }
    }
}

fn set_flag(flag: &mut bool) -> Result<(), ()> {
    if *flag {
        return Err(());
    }
    *flag = true;
    Ok(())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--code" => set_flag(&mut options.code)?,
            "--simple" => set_flag(&mut options.simple)?,
            "--smart" => set_flag(&mut options.smart)?,
            "--validate" => set_flag(&mut options.validate)?,
            "--shape-only" => set_flag(&mut options.shape_only)?,
            "--schema" => set_flag(&mut options.schema)?,
            "--list-types" => set_flag(&mut options.list_types)?,
            "--type" => {
                if options.diagram_type.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.diagram_type = Some(raw.parse().map_err(|_| ())?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.input_file.is_some() {
                    return Err(());
                }
                options.input_file = Some(arg);
            }
        }
    }

    if options.smart && options.diagram_type.is_some() {
        return Err(());
    }

    if options.shape_only && !options.validate {
        return Err(());
    }

    if (options.schema || options.list_types) && (options.validate || options.input_file.is_some())
    {
        return Err(());
    }

    Ok(options)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn list_types() -> String {
    let mut out = String::new();
    for ty in DiagramType::ALL {
        out.push_str(&format!("{ty}\t{}\t{}\n", ty.module(), ty.description()));
    }
    out
}

async fn read_input(path: Option<&str>) -> Result<String, Box<dyn Error>> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)
            .map_err(|err| format!("failed to read {path}: {err}"))?),
        None => {
            let mut input = String::new();
            tokio::io::stdin().read_to_string(&mut input).await?;
            Ok(input)
        }
    }
}

fn validate_reply(options: &CliOptions, reply: &str) -> Result<String, Box<dyn Error>> {
    let json = if options.smart {
        serde_json::to_string_pretty(&parse_smart_response(reply, options.module())?)?
    } else if options.diagram_type().is_mermaid() {
        let validation = parse_mermaid_response(reply)?;
        if validation.was_repaired() {
            tracing::warn!(
                replaced_syntax = validation.replaced_syntax,
                replaced_explanation = validation.replaced_explanation,
                "mind map reply needed repair"
            );
        }
        serde_json::to_string_pretty(&validation.diagram)?
    } else {
        let mode = if options.shape_only {
            ValidationMode::ShapeOnly
        } else {
            ValidationMode::Full
        };
        serde_json::to_string_pretty(&parse_diagram_payload(reply, mode)?)?
    };
    Ok(json)
}

async fn run(options: CliOptions) -> Result<(), Box<dyn Error>> {
    let output = if options.list_types {
        list_types()
    } else if options.schema {
        let schema = if options.smart {
            smart_response_json_schema()
        } else {
            response_json_schema()
        };
        serde_json::to_string_pretty(&schema)? + "\n"
    } else {
        let input = read_input(options.input_file.as_deref()).await?;
        if options.validate {
            validate_reply(&options, &input)? + "\n"
        } else {
            let input = if input.trim().is_empty() {
                tracing::info!("no input given, using the built-in example");
                options.default_input().to_owned()
            } else {
                input
            };
            let bridge = DiagramBridge::gemini(BridgeConfig::from_env()?)?;
            let response = bridge.generate(&input, options.request()).await?;
            serde_json::to_string_pretty(&response)? + "\n"
        }
    };

    let mut stdout = tokio::io::stdout();
    stdout.write_all(output.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "diagen".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_tracing();

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        runtime.block_on(run(options))
    })();

    if let Err(err) = result {
        eprintln!("diagen: {err}");
        std::process::exit(1);
    }
}
