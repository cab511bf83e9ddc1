use crate::context::AppContext;
use crate::format::{self, Formattable, OutputFormat};
use serde::Serialize;

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;

/// A timestamp converted into a zone's local time
#[derive(Debug, Serialize)]
pub struct ZoneConversion {
    pub epoch: String,
    pub zone: String,
    pub utc: String,
    pub local: String,
}

impl Formattable for ZoneConversion {
    fn format_pretty(&self) -> String {
        format!(
            "UTC:   {}\nLocal: {} ({})\n",
            self.utc, self.local, self.zone
        )
    }
}

/// Handle the convert command
pub fn handle_convert(ctx: &AppContext, epoch: &str, zone: Option<&str>, format: OutputFormat) {
    match convert(ctx, epoch, zone) {
        Ok(result) => match format::format_output(&result, format) {
            Ok(output) => print!("{}", output),
            Err(e) => {
                eprintln!("Error formatting output: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            format::error(&e.to_string());
            std::process::exit(1);
        }
    }
}

/// Convert the timestamp into the requested (or configured) zone
fn convert(ctx: &AppContext, epoch: &str, zone: Option<&str>) -> libtempo::Result<ZoneConversion> {
    let instant = libtempo::epoch::from_epoch_str(epoch)?;
    let identifier = zone.unwrap_or(&ctx.config.zone.default);
    let local = libtempo::zone::to_zone_named(&instant, identifier)?;

    Ok(ZoneConversion {
        epoch: epoch.trim().to_string(),
        zone: identifier.to_string(),
        utc: instant.to_rfc3339(),
        local: local.to_rfc3339(),
    })
}
