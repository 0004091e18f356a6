use clap::{crate_version, Parser, ValueEnum};
use dispatch_core::{command::Command, Receiver};
use dispatch_receivers::{car_manager, tesla_sales};

/// Command line options for the application's CLI.
#[derive(Debug, Parser)]
#[clap(
    about("Dispatches commands to vehicle sales receivers."),
    version(crate_version!())
)]
pub(crate) struct Opts {
    /// Receiver that commands are dispatched to.
    #[clap(
        short,
        long,
        value_enum,
        env = "DISPATCH_RECEIVER",
        default_value_t = ReceiverName::CarManager
    )]
    pub receiver: ReceiverName,

    /// Report unknown actions as errors instead of ignoring them.
    #[clap(long)]
    pub strict: bool,

    /// Run the scripted demonstration against the sample receivers.
    #[clap(long, conflicts_with_all = ["list", "words"])]
    pub demo: bool,

    /// List the actions that the receiver supports.
    #[clap(long, conflicts_with = "words")]
    pub list: bool,

    /// Name of the action to dispatch, followed by its positional parameters.
    ///
    /// Everything after the action name is passed on as-is, including words
    /// that look like options.
    #[clap(
        value_name = "ACTION",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        required_unless_present_any = ["demo", "list"]
    )]
    pub words: Vec<String>,
}

impl Opts {
    /// Splits the trailing words into a command record.
    pub fn command(&self) -> Command {
        let mut words = self.words.iter();
        let action = words.next().cloned().unwrap_or_default();
        Command::new(action, words)
    }
}

/// Names of the sample receivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReceiverName {
    CarManager,
    TeslaSales,
}

impl ReceiverName {
    pub fn receiver(self) -> Receiver {
        match self {
            ReceiverName::CarManager => car_manager(),
            ReceiverName::TeslaSales => tesla_sales(),
        }
    }
}
