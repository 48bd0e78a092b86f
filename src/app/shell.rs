use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::app::router::Route;
use crate::app::session::{CustomerScreen, CustomerSession};
use crate::utils::error::{Result, StorefrontError};

pub const HELP: &str = "\
Commands:
  open <PATH>     navigate, e.g. open /customer/menu?vendor=vendor1
  home            back to the vendor list
  go <VENDOR>     open a vendor's menu
  add <ITEM>      add one of a menu item to the cart
  remove <ITEM>   remove a line from the cart
  clear           empty the cart
  cart            open the cart drawer
  close           close the cart drawer
  help            show this text
  quit            end the session
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Open(String),
    Home,
    Go(String),
    Add(String),
    Remove(String),
    Clear,
    Cart,
    Close,
    Help,
    Quit,
}

impl ShellCommand {
    pub fn parse(line: &str) -> Result<Self> {
        let invalid = || StorefrontError::CommandParseError {
            input: line.trim().to_string(),
        };

        let mut words = line.split_whitespace();
        let verb = words.next().ok_or_else(invalid)?.to_ascii_lowercase();
        let arg = words.next().map(str::to_string);
        if words.next().is_some() {
            return Err(invalid());
        }

        let command = match (verb.as_str(), arg) {
            ("open", Some(path)) => ShellCommand::Open(path),
            ("home", None) => ShellCommand::Home,
            ("go", Some(vendor)) => ShellCommand::Go(vendor),
            ("add", Some(item)) => ShellCommand::Add(item),
            ("remove", Some(item)) => ShellCommand::Remove(item),
            ("clear", None) => ShellCommand::Clear,
            ("cart", None) => ShellCommand::Cart,
            ("close", None) => ShellCommand::Close,
            ("help" | "?", None) => ShellCommand::Help,
            ("quit" | "exit", None) => ShellCommand::Quit,
            _ => return Err(invalid()),
        };
        Ok(command)
    }
}

impl FromStr for ShellCommand {
    type Err = StorefrontError;

    fn from_str(s: &str) -> Result<Self> {
        ShellCommand::parse(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellReply {
    Output(String),
    Quit,
}

/// Line-oriented driver for one customer session.
pub struct CustomerShell {
    session: CustomerSession,
    screen: CustomerScreen,
}

impl CustomerShell {
    pub fn start(session: CustomerSession) -> Result<Self> {
        let screen = session.navigate(&Route::VendorList)?;
        Ok(Self { session, screen })
    }

    pub fn session(&self) -> &CustomerSession {
        &self.session
    }

    pub fn screen(&self) -> &CustomerScreen {
        &self.screen
    }

    fn show(&mut self, route: &Route) -> Result<ShellReply> {
        self.screen = self.session.navigate(route)?;
        Ok(ShellReply::Output(self.screen.render()))
    }

    pub fn execute(&mut self, command: ShellCommand) -> Result<ShellReply> {
        tracing::debug!(?command, "Shell command");
        match command {
            ShellCommand::Open(path) => self.show(&Route::parse(&path)?),
            ShellCommand::Home => self.show(&Route::VendorList),
            ShellCommand::Go(vendor) => self.show(&Route::vendor_menu(vendor)),
            ShellCommand::Add(item) => {
                self.screen.add_to_cart(&item)?;
                Ok(ShellReply::Output(self.screen.render()))
            }
            ShellCommand::Remove(item) => {
                if !self.session.cart().remove_item(&item) {
                    return Ok(ShellReply::Output(format!("'{}' is not in your cart\n", item)));
                }
                Ok(ShellReply::Output(self.screen.render()))
            }
            ShellCommand::Clear => {
                if self.session.cart().is_empty() {
                    return Ok(ShellReply::Output("Your cart is already empty.\n".to_string()));
                }
                self.session.cart().clear_cart();
                Ok(ShellReply::Output(self.screen.render()))
            }
            ShellCommand::Cart => match self.screen.drawer_mut() {
                Some(drawer) => {
                    drawer.open();
                    Ok(ShellReply::Output(self.screen.render()))
                }
                None => Ok(ShellReply::Output(
                    "The cart is not available on this page.\n".to_string(),
                )),
            },
            ShellCommand::Close => {
                if let Some(drawer) = self.screen.drawer_mut() {
                    drawer.close();
                }
                Ok(ShellReply::Output(self.screen.render()))
            }
            ShellCommand::Help => Ok(ShellReply::Output(HELP.to_string())),
            ShellCommand::Quit => Ok(ShellReply::Quit),
        }
    }

    /// Reads commands until `quit` or end of input. Command errors are
    /// reported to `output` and the session continues.
    pub fn run<R: BufRead, W: Write>(mut self, input: R, mut output: W) -> Result<()> {
        writeln!(output, "{}", self.screen.render())?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let reply = ShellCommand::parse(&line).and_then(|command| self.execute(command));
            match reply {
                Ok(ShellReply::Output(text)) => writeln!(output, "{}", text)?,
                Ok(ShellReply::Quit) => break,
                Err(e) => {
                    tracing::debug!(error = %e, "Shell command failed");
                    writeln!(output, "! {}", e.user_friendly_message())?;
                    writeln!(output, "  {}", e.recovery_suggestion())?;
                }
            }
        }

        output.flush()?;
        self.session.end();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SampleData;
    use std::io::Cursor;
    use std::rc::Rc;

    fn shell() -> CustomerShell {
        CustomerShell::start(CustomerSession::begin(Rc::new(SampleData::new()), "CharityEats"))
            .unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ShellCommand::parse("add item1").unwrap(), ShellCommand::Add("item1".into()));
        assert_eq!(ShellCommand::parse("  HOME ").unwrap(), ShellCommand::Home);
        assert_eq!(ShellCommand::parse("exit").unwrap(), ShellCommand::Quit);
        assert!(ShellCommand::parse("add").is_err());
        assert!(ShellCommand::parse("home now").is_err());
        assert!(matches!(
            ShellCommand::parse("checkout"),
            Err(StorefrontError::CommandParseError { .. })
        ));
    }

    #[test]
    fn test_add_then_open_cart() {
        let mut shell = shell();
        shell.execute(ShellCommand::Go("vendor1".into())).unwrap();
        shell.execute(ShellCommand::Add("item1".into())).unwrap();
        shell.execute(ShellCommand::Add("item1".into())).unwrap();

        let ShellReply::Output(text) = shell.execute(ShellCommand::Cart).unwrap() else {
            panic!("expected output");
        };
        assert!(text.contains("Veggie Burger x2  $15.98"));
        assert!(text.contains("Total: $15.98"));
    }

    #[test]
    fn test_remove_missing_item_reports() {
        let mut shell = shell();
        let reply = shell.execute(ShellCommand::Remove("item9".into())).unwrap();
        assert_eq!(reply, ShellReply::Output("'item9' is not in your cart\n".into()));
    }

    #[test]
    fn test_unknown_vendor_blocks_cart() {
        let mut shell = shell();
        let ShellReply::Output(text) = shell.execute(ShellCommand::Go("vendor9".into())).unwrap()
        else {
            panic!("expected output");
        };
        assert!(text.contains("Vendor Not Found"));
        assert!(shell.execute(ShellCommand::Add("item1".into())).is_err());
        assert!(shell.session().cart().is_empty());
    }

    #[test]
    fn test_run_reports_errors_and_continues() {
        let input = Cursor::new("add item2\nbogus\nadd item2\ncart\nquit\nadd item1\n");
        let mut output = Vec::new();
        shell().run(input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("! Did not understand 'bogus'"));
        assert!(text.contains("Fries x2  $5.98"));
        assert!(!text.contains("Veggie Burger x1"));
    }
}
