use dispatch_core::{
    command::{Action, BinaryOperation},
    Receiver,
};

/// Receiver name.
pub(crate) const NAME: &str = "car-manager";

/// Constructs the general car manager desk.
///
/// Callers typically use [`Receiver::execute`] on it directly.
pub fn car_manager() -> Receiver {
    Receiver::new(NAME)
        .with(Action::RequestInfo, BinaryOperation(request_info))
        .with(Action::BuyVehicle, BinaryOperation(buy_vehicle))
        .with(Action::ArrangeViewing, BinaryOperation(arrange_viewing))
}

fn request_info(model: &str, id: &str) -> String {
    format!("The information for {model} with ID {id} is foobar")
}

fn buy_vehicle(model: &str, id: &str) -> String {
    format!("You have successfully purchased Item {id} , a {model}")
}

fn arrange_viewing(model: &str, id: &str) -> String {
    format!("You have successfully booked a viewing of {model} ({id})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_arranges_viewings() {
        assert_eq!(
            car_manager().execute("arrangeViewing", ["Ferrari", "14523"]),
            Some("You have successfully booked a viewing of Ferrari (14523)".to_owned())
        );
    }

    #[test]
    fn it_requests_info() {
        assert_eq!(
            car_manager().execute("requestInfo", ["Ferrari", "14523"]),
            Some("The information for Ferrari with ID 14523 is foobar".to_owned())
        );
    }

    #[test]
    fn it_buys_vehicles() {
        assert_eq!(
            car_manager().execute("buyVehicle", ["Ford Escort", "453543"]),
            Some("You have successfully purchased Item 453543 , a Ford Escort".to_owned())
        );
    }

    #[test]
    fn it_ignores_unknown_actions() {
        assert_eq!(car_manager().execute("nonexistentAction", ["X", "1"]), None);
    }
}
