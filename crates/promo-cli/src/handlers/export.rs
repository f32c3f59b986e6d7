use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::view_models::{CampaignRowViewModel, ExportViewModel};
use crate::presentation::{Badge, CommandOutput, ConsoleRenderer, Renderer};
use crate::types::ExportFormat;
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;

const CSV_HEADER: [&str; 9] = [
    "id", "start", "end", "duration", "bid", "cpm_cents", "speed", "targeting", "status",
];

pub fn handle(ctx: &ExecutionContext, format: ExportFormat, output: Option<PathBuf>) -> Result<()> {
    let table = ctx.load_table()?;
    let rows: Vec<CampaignRowViewModel> = table
        .rows()
        .iter()
        .map(presenters::present_campaign_row)
        .collect();

    let bytes = match format {
        ExportFormat::Csv => write_csv(&rows)?,
        ExportFormat::Json => serde_json::to_vec_pretty(&rows)?,
    };

    let Some(path) = output else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&bytes)?;
        if format == ExportFormat::Json {
            writeln!(stdout)?;
        }
        return Ok(());
    };

    std::fs::write(&path, &bytes)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "campaigns exported");

    let vm = ExportViewModel {
        format: format.to_string(),
        rows: rows.len(),
        output_path: path.display().to_string(),
    };
    let result = CommandOutput::new(vm).with_badge(Badge::done("Exported"));
    ConsoleRenderer::new(ctx.json_mode()).render(result)
}

fn write_csv(rows: &[CampaignRowViewModel]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for row in rows {
        let duration = row.duration.to_string();
        let cpm = row.cpm_cents.to_string();
        writer.write_record([
            row.id.as_str(),
            row.start.as_str(),
            row.end.as_str(),
            duration.as_str(),
            row.bid.as_str(),
            cpm.as_str(),
            row.speed.as_str(),
            row.targeting.as_str(),
            row.css_class.as_str(),
        ])?;
    }
    Ok(writer.into_inner().map_err(|e| anyhow::anyhow!("{}", e))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str) -> CampaignRowViewModel {
        CampaignRowViewModel {
            id: id.to_string(),
            start: "5/1/2013".to_string(),
            end: "5/4/2013".to_string(),
            duration: 3,
            bid: "$50".to_string(),
            spent: None,
            cpm_cents: 250,
            speed: "standard".to_string(),
            targeting: "pics".to_string(),
            css_class: "campaign-row paid".to_string(),
            actions: vec!["pay".to_string()],
            price_control: Some("change".to_string()),
            info: None,
        }
    }

    #[test]
    fn test_csv_has_header_and_rows() -> Result<()> {
        let bytes = write_csv(&[row("1"), row("2")])?;
        let text = String::from_utf8(bytes)?;
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "id,start,end,duration,bid,cpm_cents,speed,targeting,status"
        );
        assert_eq!(
            lines[1],
            "1,5/1/2013,5/4/2013,3,$50,250,standard,pics,campaign-row paid"
        );
        Ok(())
    }
}
