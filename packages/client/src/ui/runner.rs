//! Interactive terminal loop.

use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::sync::mpsc;

use crate::{config::ClientConfig, domain::RoomPath, error::ClientError, infrastructure::ChatClient};

use super::{
    command::{self, HELP, UserCommand},
    render::{Renderer, render_roster},
};

const PROMPT: &str = "> ";

/// Run the terminal client until `/quit`, end of input, or Ctrl-C.
pub async fn run(config: ClientConfig) -> Result<(), ClientError> {
    tracing::info!(
        server = %config.server_url,
        room = %config.room,
        "starting chat client"
    );

    let mut lines = spawn_line_reader()?;
    let client = ChatClient::start(config);
    let mut views = client.subscribe();
    let mut renderer = Renderer::new();

    print_lines(renderer.render(&views.borrow_and_update()));
    println!("type /help for the list of commands");

    loop {
        tokio::select! {
            changed = views.changed() => {
                if changed.is_err() {
                    break;
                }
                let output = renderer.render(&views.borrow_and_update());
                print_lines(output);
            }
            line = lines.recv() => {
                let Some(line) = line else {
                    break;
                };
                match command::parse(&line) {
                    Ok(None) => {}
                    Ok(Some(UserCommand::Quit)) => break,
                    Ok(Some(user_command)) => execute(&client, user_command)?,
                    Err(e) => println!("{e}"),
                }
            }
        }
    }

    let view = client.shutdown().await?;
    print_lines(renderer.render(&view));
    Ok(())
}

fn execute(client: &ChatClient, user_command: UserCommand) -> Result<(), ClientError> {
    match user_command {
        UserCommand::Say(text) => client.send_text(text)?,
        UserCommand::Start => client.start_draw()?,
        UserCommand::Name(name) => {
            client.set_name(name.as_str())?;
            println!("you are now known as {name}");
        }
        UserCommand::Room(name) => match RoomPath::from_room_name(&name) {
            Ok(room) => client.change_room(room)?,
            Err(e) => println!("{e}"),
        },
        UserCommand::Who => print_lines(render_roster(&client.view().participants)),
        UserCommand::Help => println!("{HELP}"),
        UserCommand::Quit => {}
    }
    Ok(())
}

/// Read lines on a dedicated thread; rustyline blocks.
///
/// A plain OS thread is used so that a pending read never holds up runtime shutdown.
fn spawn_line_reader() -> Result<mpsc::UnboundedReceiver<String>, ClientError> {
    let mut editor = DefaultEditor::new()?;
    let (tx, rx) = mpsc::unbounded_channel();

    std::thread::spawn(move || {
        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = editor.add_history_entry(line.as_str());
                    }
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read input");
                    break;
                }
            }
        }
    });

    Ok(rx)
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}
