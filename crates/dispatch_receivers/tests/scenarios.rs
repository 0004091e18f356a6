use dispatch_core::{
    command::{Action, Args, Command},
    execute, try_execute, DispatchError,
};
use dispatch_receivers::{all_receivers, car_manager, tesla_sales};
use proptest::prelude::*;

#[test]
fn it_books_a_viewing_through_the_attached_dispatcher() {
    assert_eq!(
        car_manager().execute("arrangeViewing", ["Ferrari", "14523"]),
        Some("You have successfully booked a viewing of Ferrari (14523)".to_owned())
    );
}

#[test]
fn it_requests_info_through_a_command_record() {
    let command = Command {
        action: "requestInfo".into(),
        params: vec!["Ferrari".into(), "14523".into()],
    };
    assert_eq!(
        execute(&tesla_sales(), &command),
        Some("Ferrari with id: 14523".to_owned())
    );
}

#[test]
fn it_buys_a_vehicle_through_a_command_record() {
    let command = Command::new("buyVehicle", ["TOYOTA", "2213"]);
    assert_eq!(
        execute(&tesla_sales(), &command),
        Some("You purchased TOYOTA with id: 2213".to_owned())
    );
}

#[test]
fn it_does_nothing_for_unknown_actions() {
    for receiver in all_receivers() {
        assert_eq!(receiver.execute("nonexistentAction", ["X", "1"]), None);
        assert_eq!(
            try_execute(&receiver, &Command::new("nonexistentAction", ["X", "1"])),
            Err(DispatchError::UnknownAction("nonexistentAction".into()))
        );
    }
}

#[test]
fn it_registers_every_action_on_every_sample_receiver() {
    for receiver in all_receivers() {
        assert_eq!(receiver.actions(), Action::ALL.to_vec());
    }
}

proptest! {
    #[test]
    fn it_dispatches_like_a_direct_call(
        index in 0..Action::ALL.len(),
        model in "[A-Za-z0-9 ]{0,12}",
        id in "[0-9]{0,6}",
    ) {
        let action = Action::ALL[index];
        for receiver in all_receivers() {
            let args = Args::from_iter([model.as_str(), id.as_str()]);
            let direct = receiver.operation(action).map(|operation| operation.run(&args));

            let attached = receiver.execute(action.name(), [model.as_str(), id.as_str()]);
            let command = Command::new(action.name(), [&model, &id]);

            prop_assert_eq!(attached, direct.clone());
            prop_assert_eq!(execute(&receiver, &command), direct);
        }
    }
}
