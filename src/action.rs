use crate::error::{ClientError, Result};
use std::fmt;
use std::str::FromStr;

pub const HELP: &str = "Usage: client OPERATION [item_id] [--error]

OPERATION
  * items
  * availability
  * order

Examples:
  # List items in all categories
  client items

  # List items in category 0 (available categories are 0,1,2)
  client items 0

  # Query availability of item with id 1
  client availability 1

  # Query availability of an arbitrary item
  client availability

  # Send order from 'orders' dir to server
  client order

  # Send order to a slow endpoint
  client order --error";

const ERROR_FLAG: &str = "--error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListItems,
    CheckAvailability,
    SubmitOrder,
}

impl Operation {
    pub fn banner(&self) -> &'static str {
        match self {
            Operation::ListItems => "QUERY_ITEMS",
            Operation::CheckAvailability => "QUERY_ITEM_AVAILABILITY",
            Operation::SubmitOrder => "ORDER_ITEM",
        }
    }
}

impl FromStr for Operation {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Operation> {
        match s {
            "items" => Ok(Operation::ListItems),
            "availability" => Ok(Operation::CheckAvailability),
            "order" => Ok(Operation::SubmitOrder),
            _ => Err(ClientError::Usage),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, dest: &mut fmt::Formatter) -> fmt::Result {
        write!(dest, "{}", self.banner())
    }
}

/// What the user asked for on the command line.
///
/// # Examples
///
/// ```
/// use storeclient::action::{Action, Operation};
///
/// let action = Action::parse(&["availability", "42", "--error"]).unwrap();
/// assert_eq!(action.operation, Operation::CheckAvailability);
/// assert_eq!(action.item_id, Some(42));
/// assert!(action.error_mode);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub operation: Operation,
    /// `None` means "use the operation's default".
    pub item_id: Option<i64>,
    pub error_mode: bool,
}

impl Action {
    /// Accepts `OP`, `OP --error`, `OP <id>` and `OP <id> --error`, nothing else.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Action> {
        let args: Vec<&str> = args.iter().map(|a| a.as_ref()).collect();
        let (op, item_id, error_mode) = match args.as_slice() {
            [op] => (*op, None, false),
            [op, flag] if *flag == ERROR_FLAG => (*op, None, true),
            [op, id] => (*op, Some(parse_id(id)?), false),
            [op, id, flag] if *flag == ERROR_FLAG => (*op, Some(parse_id(id)?), true),
            _ => return Err(ClientError::Usage),
        };

        Ok(Action {
            operation: op.parse()?,
            item_id,
            error_mode,
        })
    }
}

fn parse_id(candidate: &str) -> Result<i64> {
    candidate.parse::<i64>().map_err(|_| ClientError::Usage)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usage_text(args: &[&str]) -> String {
        Action::parse(args).unwrap_err().to_string()
    }

    #[test]
    fn operation_only() {
        let action = Action::parse(&["items"]).unwrap();
        assert_eq!(
            action,
            Action {
                operation: Operation::ListItems,
                item_id: None,
                error_mode: false
            }
        );
    }

    #[test]
    fn operation_with_error_flag() {
        let action = Action::parse(&["order", "--error"]).unwrap();
        assert_eq!(action.operation, Operation::SubmitOrder);
        assert_eq!(action.item_id, None);
        assert!(action.error_mode);
    }

    #[test]
    fn operation_with_id() {
        let action = Action::parse(&["items", "2"]).unwrap();
        assert_eq!(action.operation, Operation::ListItems);
        assert_eq!(action.item_id, Some(2));
        assert!(!action.error_mode);
    }

    #[test]
    fn operation_with_id_and_error_flag() {
        let action = Action::parse(&["availability", "7", "--error"]).unwrap();
        assert_eq!(action.operation, Operation::CheckAvailability);
        assert_eq!(action.item_id, Some(7));
        assert!(action.error_mode);
    }

    #[test]
    fn malformed_arguments_yield_help() {
        let bad: &[&[&str]] = &[
            &[],
            &["purchase"],
            &["items", "abc"],
            &["items", "--error", "3"],
            &["items", "3", "--verbose"],
            &["items", "3", "--error", "extra"],
            &["--error"],
        ];
        for args in bad {
            assert_eq!(usage_text(args), HELP, "args: {:?}", args);
        }
    }

    #[test]
    fn banners() {
        assert_eq!(Operation::ListItems.to_string(), "QUERY_ITEMS");
        assert_eq!(
            Operation::CheckAvailability.to_string(),
            "QUERY_ITEM_AVAILABILITY"
        );
        assert_eq!(Operation::SubmitOrder.to_string(), "ORDER_ITEM");
    }
}
