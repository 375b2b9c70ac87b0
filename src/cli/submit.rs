//! CLI command for submitting a draft file

use std::path::Path;

use crate::config::Settings;
use crate::display::format_request_details;
use crate::error::ReimburseResult;
use crate::services::draft::Draft;
use crate::services::submit;

/// Load a draft, submit it, and print the resulting request
pub fn handle_submit_command(settings: &Settings, draft: &Path) -> ReimburseResult<()> {
    let form = Draft::from_path(draft)?.into_form();
    let submission = submit(&form)?;

    println!("{}", submission.notification);
    println!();
    print!(
        "{}",
        format_request_details(
            &submission.request,
            &settings.currency_symbol,
            &settings.date_format
        )
    );

    Ok(())
}
