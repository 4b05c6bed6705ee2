//! Interactive console loop

use insight_client::{
    ClientError, CsvUpload, FilterChange, HttpGateway, PageNav, RosterSession, SuggestionOutcome,
};
use std::path::Path;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};

use crate::command::{Command, CommandError, HELP};
use crate::render::{render_page, render_suggestion};

pub struct Console {
    session: RosterSession<HttpGateway>,
    lines: Lines<BufReader<Stdin>>,
}

impl Console {
    pub fn new(session: RosterSession<HttpGateway>) -> Self {
        Self {
            session,
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        println!("{}", render_page(self.session.page(), self.session.actions()));
        println!("Type `help` for commands.");

        loop {
            prompt("> ").await?;
            let Some(line) = self.lines.next_line().await? else {
                break;
            };

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(CommandError::Empty) => continue,
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            };

            if command == Command::Quit {
                break;
            }
            self.execute(command).await?;
        }

        tracing::info!("Console closed");
        Ok(())
    }

    async fn execute(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Refresh => {
                self.session.refresh().await;
            }
            Command::Next => self.navigate(PageNav::Next).await,
            Command::Prev => self.navigate(PageNav::Prev).await,
            Command::Page(n) => self.navigate(PageNav::Jump(n)).await,
            Command::Limit(limit) => {
                self.session.set_limit(limit).await;
            }
            Command::Membership(filter) => {
                self.session
                    .set_filter(FilterChange::Membership(filter))
                    .await;
            }
            Command::Risk(filter) => {
                self.session.set_filter(FilterChange::Risk(filter)).await;
            }
            Command::File(path) => {
                self.choose_file(&path).await;
            }
            Command::Import(path) => {
                if let Some(path) = path
                    && !self.choose_file(&path).await
                {
                    self.show_page();
                    return Ok(());
                }
                self.session.import().await;
            }
            Command::Demo => {
                if self
                    .confirm("This replaces ALL customer data with demo data. Continue? [y/N] ")
                    .await?
                {
                    self.session.load_demo().await;
                } else {
                    println!("Cancelled.");
                    return Ok(());
                }
            }
            Command::Suggest(id) => {
                match self.session.request_suggestion(id).await {
                    SuggestionOutcome::Shown => {}
                    SuggestionOutcome::Busy => println!("Suggestion for {} is still loading.", id),
                    SuggestionOutcome::Debounced => {}
                    SuggestionOutcome::Reopened => {
                        println!("Suggestion for {} reset; run `suggest {}` to fetch again.", id, id)
                    }
                    SuggestionOutcome::Failed(notice) => println!("!! {}", notice),
                }
                if let Some(shown) = self.session.actions().displayed() {
                    println!("{}", render_suggestion(shown));
                }
                return Ok(());
            }
            Command::Close => {
                self.session.dismiss_suggestion();
            }
            Command::Show => {}
            Command::Help => {
                println!("{}", HELP);
                return Ok(());
            }
            Command::Health => {
                report_health(self.session.gateway()).await;
                return Ok(());
            }
            Command::Quit => return Ok(()),
        }

        self.show_page();
        Ok(())
    }

    async fn navigate(&mut self, nav: PageNav) {
        if self.session.navigate(nav).await.is_none() {
            println!("Not available right now.");
        }
    }

    /// Read a CSV file and make it the import candidate
    async fn choose_file(&mut self, path: &Path) -> bool {
        match CsvUpload::from_path(path).await {
            Ok(upload) => {
                println!("Chosen: {} ({} bytes)", upload.file_name, upload.len());
                self.session.choose_file(upload);
                true
            }
            Err(e) => {
                let e = match e {
                    ClientError::Io(io) => ClientError::validation(format!(
                        "Cannot read {}: {}",
                        path.display(),
                        io
                    )),
                    other => other,
                };
                self.session.reject(&e);
                false
            }
        }
    }

    async fn confirm(&mut self, question: &str) -> anyhow::Result<bool> {
        prompt(question).await?;
        let answer = self.lines.next_line().await?.unwrap_or_default();
        Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
    }

    fn show_page(&self) {
        println!("{}", render_page(self.session.page(), self.session.actions()));
    }
}

/// Print the backend health; failures are reported, never fatal
pub async fn report_health(gateway: &HttpGateway) {
    match gateway.health().await {
        Ok(status) if status.is_ok() => println!("Backend {} is up.", gateway.api_root()),
        Ok(status) => println!("Backend answered with status `{}`.", status.status),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            println!("Backend unreachable: {}", e.user_message());
        }
    }
}

async fn prompt(text: &str) -> std::io::Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(text.as_bytes()).await?;
    stdout.flush().await
}
