use anyhow::{Context, Result};
use comfy_table::{Cell, Color, Table};

use cellax_cli::config::{DecisionMode, Settings};
use cellax_cli::generate::{GenerateRequest, GenerateResult, run_generate};
use cellax_cli::table::{apply_table_style, dim_cell, header_cell};
use cellax_model::RuleDocument;

use crate::cli::{DecisionArg, GenerateArgs, RulesArgs};

pub fn run_rules(args: &RulesArgs) -> Result<()> {
    let document = RuleDocument::load(&args.rules).context("load rules")?;
    let mut table = Table::new();
    table.set_header(
        ["#", "Sheet", "Range", "Active", "Expression", "Comment"]
            .into_iter()
            .map(header_cell),
    );
    apply_table_style(&mut table);
    for (index, rule) in document.rules.iter().enumerate() {
        let active = if rule.active {
            Cell::new("yes").fg(Color::Green)
        } else {
            dim_cell("no")
        };
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&rule.sheet_name),
            Cell::new(rule.range_label()),
            active,
            Cell::new(&rule.expression),
            Cell::new(&rule.comment),
        ]);
    }
    println!("{table}");
    println!(
        "{} rules ({} active)",
        document.rules.len(),
        document.active_count()
    );
    Ok(())
}

pub fn generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let cwd = std::env::current_dir().context("resolve working directory")?;
    let settings = Settings::discover(args.config.as_deref(), &cwd)?;
    let request = GenerateRequest {
        rules: args.rules.clone(),
        workbook: args.workbook.clone(),
        ontology: args.ontology.clone(),
        output: args.output.clone(),
        decision: args.decision.map(decision_mode),
        render_log: args.render_log.clone(),
    };
    let result = run_generate(&request, &settings)?;
    if let Some(document) = &result.document {
        print!("{document}");
    }
    Ok(result)
}

fn decision_mode(arg: DecisionArg) -> DecisionMode {
    match arg {
        DecisionArg::Prompt => DecisionMode::Prompt,
        DecisionArg::Cancel => DecisionMode::Cancel,
        DecisionArg::New => DecisionMode::New,
        DecisionArg::Current => DecisionMode::Current,
    }
}
