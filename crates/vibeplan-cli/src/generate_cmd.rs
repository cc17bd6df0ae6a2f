use std::io::Write;

use anyhow::Context;

use vibeplan_core::ProjectSpec;
use vibeplan_core::plan::{Clock, PlanGenerator, render_roadmap};

use crate::config::VibeplanConfig;
use crate::spec_input;

/// Render the plan, with the roadmap appended when `roadmap` is set.
pub fn render<C: Clock>(
    generator: &PlanGenerator<C>,
    spec: &ProjectSpec,
    roadmap: bool,
) -> String {
    let mut out = generator.generate(spec);
    if roadmap {
        out.push('\n');
        out.push_str(&render_roadmap(spec));
    }
    out
}

/// Execute `vibeplan generate`: print the plan or write it to `output`.
pub fn run_generate(
    spec_path: &str,
    output: Option<&str>,
    roadmap: bool,
    config: &VibeplanConfig,
) -> anyhow::Result<()> {
    let spec = spec_input::load_spec(spec_path, config)?;
    let plan = render(&PlanGenerator::new(), &spec, roadmap);

    let mut writer: Box<dyn Write> = if let Some(path) = output {
        Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("cannot create output file: {path}"))?,
        )
    } else {
        Box::new(std::io::stdout().lock())
    };
    writer.write_all(plan.as_bytes()).context("failed to write plan")?;
    writer.flush().context("failed to write plan")?;

    if let Some(path) = output {
        println!("Plan written to {path}");
    }

    Ok(())
}
