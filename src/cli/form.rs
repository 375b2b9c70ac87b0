//! Interactive reimbursement form
//!
//! A line-oriented form on stdin. Each line is one command; each command
//! becomes one [`FormAction`] fed to the session, so the form behaves the
//! same whether it is typed in or replayed from a draft.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::config::Settings;
use crate::display::{format_ledger, format_request_details};
use crate::error::ReimburseResult;
use crate::models::{Attachment, EntryId, EntryUpdate, Request};
use crate::services::{submit_with_notice, FormAction, FormSession};

const HELP: &str = "\
Commands:
  name <text>               Set the requester name
  start <YYYY-MM-DD>        Set the period start date
  end <YYYY-MM-DD>          Set the period end date
  add                       Add a blank row
  remove <id>               Remove a row
  set <id> <field> <value>  Set date, payee, description, job, expenses or income
  attach <id> <path>        Attach a receipt to a row
  detach <id>               Remove a row's receipt
  show                      Show the form
  submit                    Submit the request
  help                      Show this help
  quit                      Leave without submitting
";

/// One line of form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Action(FormAction),
    Show,
    Submit,
    Help,
    Quit,
}

impl FromStr for FormCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, rest) = split_word(line);

        let action = match command.to_lowercase().as_str() {
            "show" | "ls" => return Ok(Self::Show),
            "submit" => return Ok(Self::Submit),
            "help" | "?" => return Ok(Self::Help),
            "quit" | "exit" | "q" => return Ok(Self::Quit),
            "name" => FormAction::SetRequester(rest.to_string()),
            "start" => FormAction::SetPeriodStart(rest.to_string()),
            "end" => FormAction::SetPeriodEnd(rest.to_string()),
            "add" => FormAction::AddRow,
            "remove" | "rm" => FormAction::RemoveRow(parse_entry_id(rest)?),
            "set" => {
                let (id, rest) = split_word(rest);
                let (field, value) = split_word(rest);
                if field.is_empty() {
                    return Err("Usage: set <id> <field> <value>".to_string());
                }
                let update = EntryUpdate::from_field(field, value)?;
                FormAction::UpdateEntry(parse_entry_id(id)?, update)
            }
            "attach" => {
                let (id, path) = split_word(rest);
                if path.is_empty() {
                    return Err("Usage: attach <id> <path>".to_string());
                }
                FormAction::UpdateEntry(
                    parse_entry_id(id)?,
                    EntryUpdate::SetAttachment(Attachment::from_path(path)),
                )
            }
            "detach" => FormAction::UpdateEntry(parse_entry_id(rest)?, EntryUpdate::ClearAttachment),
            "" => return Err("Empty command".to_string()),
            other => {
                return Err(format!(
                    "Unknown command: {}. Type 'help' for a list of commands.",
                    other
                ))
            }
        };

        Ok(Self::Action(action))
    }
}

fn split_word(s: &str) -> (&str, &str) {
    match s.trim().split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (s.trim(), ""),
    }
}

fn parse_entry_id(s: &str) -> Result<EntryId, String> {
    s.trim()
        .parse::<EntryId>()
        .map_err(|_| format!("Invalid row id: '{}'", s.trim()))
}

/// Run the form until it is submitted, quit, or input ends
///
/// Returns the submitted request, if any.
pub fn run_form<R: BufRead, W: Write>(
    form: FormSession,
    input: R,
    output: &mut W,
    settings: &Settings,
) -> ReimburseResult<Option<Request>> {
    let mut form = form;

    writeln!(output, "Reimbursement Request Form")?;
    writeln!(output, "Type 'help' for a list of commands.")?;
    writeln!(output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<FormCommand>() {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "{}", message)?;
                continue;
            }
        };

        match command {
            FormCommand::Action(action) => {
                if let Some(notification) = form.dispatch(action) {
                    writeln!(output, "{}", notification)?;
                }
            }
            FormCommand::Show => write_form(&form, output, settings)?,
            FormCommand::Help => write!(output, "{}", HELP)?,
            FormCommand::Quit => {
                writeln!(output, "Form closed without submitting.")?;
                return Ok(None);
            }
            FormCommand::Submit => {
                let (request, notification) = submit_with_notice(&form);
                writeln!(output, "{}", notification)?;
                if let Some(request) = request {
                    writeln!(output)?;
                    write!(
                        output,
                        "{}",
                        format_request_details(
                            &request,
                            &settings.currency_symbol,
                            &settings.date_format
                        )
                    )?;
                    return Ok(Some(request));
                }
            }
        }
    }

    Ok(None)
}

fn write_form<W: Write>(
    form: &FormSession,
    output: &mut W,
    settings: &Settings,
) -> ReimburseResult<()> {
    writeln!(output, "Name:         {}", form.requester())?;
    writeln!(output, "Period Start: {}", form.period_start())?;
    writeln!(output, "Period End:   {}", form.period_end())?;
    writeln!(output)?;
    write!(
        output,
        "{}",
        format_ledger(form.ledger(), &settings.currency_symbol)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AmountField, Money, TextField};

    fn run(input: &str) -> (Option<Request>, String) {
        let mut output = Vec::new();
        let request = run_form(
            FormSession::new(),
            input.as_bytes(),
            &mut output,
            &Settings::default(),
        )
        .unwrap();
        (request, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "name  Jane Smith ".parse::<FormCommand>().unwrap(),
            FormCommand::Action(FormAction::SetRequester("Jane Smith".into()))
        );
        assert_eq!(
            "set 2 payee Print Shop".parse::<FormCommand>().unwrap(),
            FormCommand::Action(FormAction::UpdateEntry(
                EntryId::new(2),
                EntryUpdate::SetText(TextField::Payee, "Print Shop".into())
            ))
        );
        assert_eq!(
            "set #1 expenses 12.50".parse::<FormCommand>().unwrap(),
            FormCommand::Action(FormAction::UpdateEntry(
                EntryId::new(1),
                EntryUpdate::SetAmount(AmountField::Expenses, "12.50".into())
            ))
        );
        assert_eq!(
            "detach 3".parse::<FormCommand>().unwrap(),
            FormCommand::Action(FormAction::UpdateEntry(
                EntryId::new(3),
                EntryUpdate::ClearAttachment
            ))
        );
        assert_eq!("QUIT".parse::<FormCommand>().unwrap(), FormCommand::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!("remove x".parse::<FormCommand>().is_err());
        assert!("set 1".parse::<FormCommand>().is_err());
        assert!("set 1 color red".parse::<FormCommand>().is_err());
        assert!("attach 1".parse::<FormCommand>().is_err());
        assert!("dance".parse::<FormCommand>().unwrap_err().contains("Unknown command"));
    }

    #[test]
    fn test_remove_last_row_warns() {
        let (request, output) = run("remove 1\nquit\n");
        assert!(request.is_none());
        assert!(output.contains("Cannot Remove Row: At least one row must remain"));
        assert!(output.contains("Form closed without submitting."));
    }

    #[test]
    fn test_submit_missing_fields_keeps_form_open() {
        let (request, output) = run("set 1 expenses 20\nsubmit\nquit\n");
        assert!(request.is_none());
        assert!(output.contains("Missing Information: Please fill in all required fields."));
        assert!(output.contains("Form closed without submitting."));
    }

    #[test]
    fn test_complete_form_submits() {
        let input = "\
name Jane Smith
start 2024-04-01
end 2024-04-30
set 1 payee Cab Co
set 1 expenses 40
add
set 2 payee Hotel
set 2 expenses 210.75
set 2 income 10.75
attach 2 receipts/hotel.pdf
remove 1
show
submit
";
        let (request, output) = run(input);
        let request = request.unwrap();

        assert_eq!(request.requester, "Jane Smith");
        assert_eq!(request.ledger.len(), 1);
        assert_eq!(request.total(), Money::from_cents(20000));
        assert_eq!(
            request.ledger.entries()[0].attachment_name(),
            Some("hotel.pdf")
        );
        assert!(output.contains("Request Submitted"));
        assert!(output.contains("Total Amount: $200.00"));
    }

    #[test]
    fn test_unknown_id_is_silent() {
        let (_, output) = run("set 9 payee Nobody\nshow\n");
        assert!(!output.contains("Nobody"));
    }
}
