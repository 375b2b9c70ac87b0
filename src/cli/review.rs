//! CLI commands for the review board
//!
//! The board holds requests for the life of one process: the demo requests,
//! or the contents of a `--requests` JSON file written by `export`.

use clap::Subcommand;
use std::io::Write;
use std::path::Path;

use crate::cli::form::run_form;
use crate::config::Settings;
use crate::display::{format_request_details, format_request_list};
use crate::error::{ReimburseError, ReimburseResult};
use crate::export::import_requests_json;
use crate::models::Request;
use crate::seed::demo_requests;
use crate::services::{FormSession, ReviewQueue};

const PENDING_HEADING: &str = "Pending Reimbursement Requests";
const ALL_HEADING: &str = "All Reimbursement Requests";

/// Review subcommands
#[derive(Subcommand, Debug)]
pub enum ReviewCommands {
    /// List requests awaiting review
    List {
        /// Include approved and denied requests
        #[arg(short, long)]
        all: bool,
    },

    /// Show one request with its line items
    Show {
        /// Request ID (full UUID or short prefix)
        id: String,
    },

    /// Approve a pending request
    Approve {
        /// Request ID (full UUID or short prefix)
        id: String,
    },

    /// Deny a pending request
    Deny {
        /// Request ID (full UUID or short prefix)
        id: String,
    },

    /// Reopen a request in the form and resubmit it
    Edit {
        /// Request ID (full UUID or short prefix)
        id: String,
    },
}

/// Build the review board from a requests file, or the demo requests
pub fn load_queue(settings: &Settings, requests: Option<&Path>) -> ReimburseResult<ReviewQueue> {
    let requests = match requests {
        Some(path) => {
            let contents = std::fs::read_to_string(path).map_err(|e| {
                ReimburseError::Io(format!("Failed to read {}: {}", path.display(), e))
            })?;
            let requests = import_requests_json(&contents)?;
            log::debug!("Loaded {} requests from {}", requests.len(), path.display());
            requests
        }
        None if settings.seed_demo_requests => demo_requests()?,
        None => Vec::new(),
    };

    Ok(ReviewQueue::new(requests))
}

/// Handle review commands
pub fn handle_review_command(
    settings: &Settings,
    requests: Option<&Path>,
    cmd: ReviewCommands,
) -> ReimburseResult<()> {
    let mut queue = load_queue(settings, requests)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cmd {
        ReviewCommands::List { all } => {
            if all {
                let listed: Vec<&Request> = queue.all().iter().collect();
                write_list(&mut out, ALL_HEADING, &listed, settings)?;
            } else {
                write_list(&mut out, PENDING_HEADING, &queue.pending(), settings)?;
            }
        }
        ReviewCommands::Show { id } => {
            let request = queue.find(&id)?;
            write!(
                out,
                "{}",
                format_request_details(request, &settings.currency_symbol, &settings.date_format)
            )?;
        }
        ReviewCommands::Approve { id } => {
            let request_id = queue.find(&id)?.id;
            let notification = queue.approve(request_id)?;
            writeln!(out, "{}", notification)?;
            writeln!(out)?;
            write_list(&mut out, PENDING_HEADING, &queue.pending(), settings)?;
        }
        ReviewCommands::Deny { id } => {
            let request_id = queue.find(&id)?.id;
            let notification = queue.deny(request_id)?;
            writeln!(out, "{}", notification)?;
            writeln!(out)?;
            write_list(&mut out, PENDING_HEADING, &queue.pending(), settings)?;
        }
        ReviewCommands::Edit { id } => {
            let form = FormSession::edit(queue.find(&id)?)?;
            let stdin = std::io::stdin();
            if let Some(updated) = run_form(form, stdin.lock(), &mut out, settings)? {
                queue.submit(updated)?;
                writeln!(out)?;
                write_list(&mut out, PENDING_HEADING, &queue.pending(), settings)?;
            }
        }
    }

    Ok(())
}

fn write_list<W: Write>(
    out: &mut W,
    heading: &str,
    requests: &[&Request],
    settings: &Settings,
) -> ReimburseResult<()> {
    writeln!(out, "{}", heading)?;
    write!(
        out,
        "{}",
        format_request_list(requests, &settings.currency_symbol, &settings.date_format)
    )?;
    Ok(())
}
