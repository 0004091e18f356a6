use dispatch_core::{
    command::{Action, BinaryOperation},
    Receiver,
};

/// Receiver name.
pub(crate) const NAME: &str = "tesla-sales";

/// Constructs the Tesla sales desk.
///
/// Commands are sent to it with [`dispatch_core::execute`].
pub fn tesla_sales() -> Receiver {
    Receiver::new(NAME)
        .with(Action::RequestInfo, BinaryOperation(request_info))
        .with(Action::BuyVehicle, BinaryOperation(buy_vehicle))
        .with(Action::ArrangeViewing, BinaryOperation(arrange_viewing))
}

fn request_info(model: &str, id: &str) -> String {
    format!("{model} with id: {id}")
}

fn buy_vehicle(model: &str, id: &str) -> String {
    format!("You purchased {model} with id: {id}")
}

fn arrange_viewing(model: &str, id: &str) -> String {
    format!("You have successfully booked a viewing of {model} ({id})")
}

#[cfg(test)]
mod tests {
    use dispatch_core::{command::Command, execute};

    use super::*;

    #[test]
    fn it_requests_info() {
        let command = Command::new("requestInfo", ["Ferrari", "14523"]);
        assert_eq!(
            execute(&tesla_sales(), &command),
            Some("Ferrari with id: 14523".to_owned())
        );
    }

    #[test]
    fn it_buys_vehicles() {
        let command = Command::new("buyVehicle", ["TOYOTA", "2213"]);
        assert_eq!(
            execute(&tesla_sales(), &command),
            Some("You purchased TOYOTA with id: 2213".to_owned())
        );
    }

    #[test]
    fn it_arranges_viewings() {
        let command = Command::new("arrangeViewing", ["Model S", "1"]);
        assert_eq!(
            execute(&tesla_sales(), &command),
            Some("You have successfully booked a viewing of Model S (1)".to_owned())
        );
    }
}
