use super::fill_form;
use crate::args::DraftArgs;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{Badge, CommandOutput, ConsoleRenderer, NextStep, Renderer};
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, draft: &DraftArgs) -> Result<()> {
    let mut form = ctx.form()?;
    let accepted = fill_form(&mut form, draft)?;

    let vm = presenters::present_quote(form.state(), form.policy());
    let mut result = CommandOutput::new(vm);
    result = if accepted {
        result.with_badge(Badge::done("Bid accepted"))
    } else {
        result
            .with_badge(Badge::below_minimum())
            .then(NextStep::hint("Raise the bid or shorten the campaign"))
    };

    ConsoleRenderer::new(ctx.json_mode()).render(result)
}
