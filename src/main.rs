use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use streamflix_console::config::{AppConfig, CliConfig, FileConfig, DEFAULT_BASE_URL};
use streamflix_console::events::Dispatch;
use streamflix_console::handlers::{self, render_page};
use streamflix_console::page::{ElementKind, VirtualPage};
use streamflix_console::{Console, HttpBackend};

use rustyline::{
    completion::Completer, highlight::Highlighter, history::FileHistory, validate::Validator,
    CompletionType, Config, Editor, Helper,
};

#[derive(Parser, Debug)]
#[command(version, about = "Drives the Streamflix demo forms against a running backend")]
struct CliArgs {
    /// Base URL of the backend (usually the API gateway).
    #[clap(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Path to a TOML config file. Values in the file override CLI arguments.
    #[clap(long)]
    pub config: Option<PathBuf>,

    /// Leave an element out of the rendered page. Can be repeated.
    #[clap(long)]
    pub omit: Vec<String>,
}

#[derive(Parser)]
#[command(name = "")]
struct InnerCli {
    #[command(subcommand)]
    command: InnerCommand,
}

#[derive(Subcommand)]
enum InnerCommand {
    /// Fills the given fields and submits a form, e.g. `submit form-get-user id=1`.
    Submit {
        form_id: String,
        /// Field values as name=value.
        fields: Vec<String>,
        /// Return immediately instead of waiting for the response.
        #[arg(long)]
        detach: bool,
    },

    /// Sets form fields without submitting.
    Fill { form_id: String, fields: Vec<String> },

    /// Clears every field of a form.
    Reset { form_id: String },

    /// Clicks a button, e.g. `click btn-demo-singleton`.
    Click {
        button_id: String,
        #[arg(long)]
        detach: bool,
    },

    /// Prints the content of an output region.
    Show { region_id: String },

    /// Lists the elements on the page and whether a handler is bound to them.
    Elements,

    /// Close this program.
    Exit,
}

enum CommandExecutionResult {
    Ok,
    Exit,
    Error(String),
}

const PROMPT: &str = ">> ";

struct Session {
    runtime: Runtime,
    page: Arc<VirtualPage>,
    console: Console,
}

impl Session {
    fn fill(&self, form_id: &str, fields: &[String]) -> Result<()> {
        for field in fields {
            let Some((name, value)) = field.split_once('=') else {
                bail!("Expected name=value, got '{}'", field);
            };
            if !self.page.fill(form_id, name, value) {
                bail!("#{} is not a form on this page", form_id);
            }
        }
        Ok(())
    }

    /// Waits for `dispatch` unless detached, then prints the element's region.
    fn finish(&self, element_id: &str, dispatch: Dispatch, detach: bool) -> Result<()> {
        if !dispatch.handled() {
            bail!("#{} has no handler on this page", element_id);
        }
        if detach {
            println!("Submitted, use `show` to see the result.");
            return Ok(());
        }
        self.runtime
            .block_on(dispatch.wait())
            .context("Handler task failed")?;
        if let Some(route) = handlers::route_for(element_id) {
            self.print_region(route.region);
        }
        Ok(())
    }

    fn print_region(&self, region_id: &str) {
        match self.console.region_text(region_id) {
            Some(text) => println!("#{}:\n{}", region_id, text),
            None => println!("#{} is not on this page", region_id),
        }
    }
}

fn execute_command(line: String, session: &Session) -> CommandExecutionResult {
    if line.is_empty() {
        return CommandExecutionResult::Ok;
    }

    let args =
        shlex::split(&line).unwrap_or_else(|| line.split_whitespace().map(String::from).collect());

    let cli = InnerCli::try_parse_from(std::iter::once(" ").chain(args.iter().map(String::as_str)));

    let result = match cli {
        Ok(cli) => {
            println!("{} {}", PROMPT, &line);
            match cli.command {
                InnerCommand::Submit {
                    form_id,
                    fields,
                    detach,
                } => session.fill(&form_id, &fields).and_then(|_| {
                    let dispatch = {
                        let _guard = session.runtime.enter();
                        session.console.submit(&form_id)
                    };
                    session.finish(&form_id, dispatch, detach)
                }),
                InnerCommand::Fill { form_id, fields } => session.fill(&form_id, &fields),
                InnerCommand::Reset { form_id } => {
                    if session.page.reset(&form_id) {
                        Ok(())
                    } else {
                        Err(anyhow::anyhow!("#{} is not a form on this page", form_id))
                    }
                }
                InnerCommand::Click { button_id, detach } => {
                    let dispatch = {
                        let _guard = session.runtime.enter();
                        session.console.click(&button_id)
                    };
                    session.finish(&button_id, dispatch, detach)
                }
                InnerCommand::Show { region_id } => {
                    session.print_region(&region_id);
                    Ok(())
                }
                InnerCommand::Elements => {
                    for element in session.page.elements() {
                        let marker = match element.kind {
                            ElementKind::Output => "",
                            _ if session.console.is_bound(&element.id) => " (bound)",
                            _ => " (unbound)",
                        };
                        println!("  <{}> #{}{}", element.kind.tag(), element.id, marker);
                    }
                    Ok(())
                }
                InnerCommand::Exit => return CommandExecutionResult::Exit,
            }
        }
        Err(e) => {
            if e.print().is_err() {
                println!("{}", e);
            }
            Ok(())
        }
    };

    match result {
        Ok(()) => CommandExecutionResult::Ok,
        Err(err) => CommandExecutionResult::Error(format!("{:#}", err)),
    }
}

#[derive(rustyline_derive::Hinter)]
struct ConsoleHelper {
    commands_names: Vec<String>,
    element_ids: Vec<String>,
}

impl ConsoleHelper {
    pub fn new(page: &VirtualPage) -> Self {
        let commands_names: Vec<String> = InnerCli::command()
            .get_subcommands()
            .map(|sc| sc.get_name().to_string())
            .collect();
        let element_ids = page.elements().into_iter().map(|e| e.id).collect();

        ConsoleHelper {
            commands_names,
            element_ids,
        }
    }
}

impl Completer for ConsoleHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        let line = &line[..pos];
        let (start, word, candidates) = match line.rfind(' ') {
            None => (0, line, &self.commands_names),
            // Only the element id after the command is completed.
            Some(idx) if !line[..idx].trim().contains(' ') => {
                (idx + 1, &line[idx + 1..], &self.element_ids)
            }
            Some(_) => return Ok((pos, Vec::with_capacity(0))),
        };

        let matches = candidates
            .iter()
            .filter(|c| c.starts_with(word))
            .cloned()
            .collect::<Vec<_>>();

        Ok((start, matches))
    }
}

impl Highlighter for ConsoleHelper {}
impl Validator for ConsoleHelper {}
impl Helper for ConsoleHelper {}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = cli_args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;
    let cli_config = CliConfig {
        base_url: cli_args.base_url,
        omit: cli_args.omit,
    };
    let config = AppConfig::resolve(&cli_config, file_config)?;

    let runtime = Runtime::new().context("Failed to start async runtime")?;
    let backend = Arc::new(HttpBackend::new(config.base_url.clone())?);
    info!("Using backend at {}", backend.base_url());

    let page = Arc::new(render_page(&config.omit));
    let console = Console::load(page.clone(), backend);

    InnerCli::command().print_long_help()?;

    let rl_config = Config::builder()
        .completion_type(CompletionType::List)
        .build();
    let mut rl = Editor::<ConsoleHelper, FileHistory>::with_config(rl_config)?;
    rl.set_helper(Some(ConsoleHelper::new(&page)));

    let session = Session {
        runtime,
        page,
        console,
    };

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                match execute_command(line, &session) {
                    CommandExecutionResult::Ok => {}
                    CommandExecutionResult::Exit => break,
                    CommandExecutionResult::Error(err) => {
                        eprintln!("Error: {}", err);
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("CTRL-D: exiting.");
                break;
            }
            Err(e) => {
                println!("Error: {:?}", e);
                break;
            }
        }
    }
    Ok(())
}
