use clap::{command, Parser};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = r###"
MockGpt is a development stand-in for a hosted language model and its tool
plugins. Every prompt is answered from a small pool of canned responses,
streamed word by word the way a real provider delivers them.

Use it to exercise plugin-facing code without network access or API keys:
- Chat: stream a canned completion with realistic pacing and usage totals.
- Add: run the calculator tool the way a host runtime would invoke it.
- Tokens: estimate a prompt's token count with the model's own heuristic.
- Schema: print the descriptors the model and tools hand to a host registry.
"###
)]
pub struct Args {
    #[command(subcommand)]
    pub subcmd: Option<SubCommands>
}

#[derive(Parser, Debug)]
pub enum SubCommands {
    /// Run a mock completion and print the response.
    Chat(ChatSubCommand),
    /// Add two numbers with the calculator tool.
    Add(AddSubCommand),
    /// Estimate how many tokens a prompt costs.
    Tokens(TokensSubCommand),
    /// Show the descriptor a model or tool reports to the host.
    Schema(SchemaSubCommand),
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Run a mock completion", long_about = None)]
pub struct ChatSubCommand {
    /// The prompt to send. Reads stdin when empty.
    pub prompt: Vec<String>,

    /// Model name to report in the result.
    #[arg(short, long)]
    pub model: Option<String>,

    /// System message placed before the prompt.
    #[arg(short, long)]
    pub system: Option<String>,

    /// Print the whole response at once instead of streaming it.
    #[arg(long)]
    pub no_stream: bool,

    /// Seed the response picker for a repeatable run.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Add two numbers", long_about = None)]
pub struct AddSubCommand {
    /// First number. Defaults to 0.
    #[arg(allow_negative_numbers = true)]
    pub x: Option<String>,

    /// Second number. Defaults to 0.
    #[arg(allow_negative_numbers = true)]
    pub y: Option<String>,

    /// Wrap the result in a JSON message instead of plain text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Estimate prompt tokens", long_about = None)]
pub struct TokensSubCommand {
    /// Text to measure. Reads stdin when empty.
    pub text: Vec<String>,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Show a model or tool descriptor", long_about = None)]
pub struct SchemaSubCommand {
    /// Model name to describe.
    #[arg(short, long)]
    pub model: Option<String>,

    /// Describe a tool instead of a model.
    #[arg(short, long)]
    pub tool: Option<String>,
}
