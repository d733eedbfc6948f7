use colored::*;
use doccanvas::api::DocApi;
use doccanvas::commands::{CmdResult, ElementUpdate, MessageLevel};
use doccanvas::error::Result;
use doccanvas::model::Document;
use doccanvas::resolve::PageContent;
use doccanvas::store::fs::FileStore;
use doccanvas::validate::{Issue, Severity};

use clap::Parser;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut api = DocApi::new(FileStore::new(&cli.dir));

    match cli.command {
        Commands::New { title } => {
            print_messages(&api.create_document(title)?);
        }
        Commands::List => {
            let result = api.list_documents()?;
            print_document_list(&result.listed_documents);
        }
        Commands::Show { id } => {
            let result = api.show_document(&id)?;
            if let Some(doc) = result.listed_documents.first() {
                print_document(doc);
            }
        }
        Commands::Delete { id } => {
            print_messages(&api.delete_document(&id)?);
        }
        Commands::AddPage { id, template } => {
            print_messages(&api.add_page(&id, template)?);
        }
        Commands::AddText { id, page } => {
            print_messages(&api.add_text(&id, page_index(page))?);
        }
        Commands::AddImage { id, file_id, page } => {
            print_messages(&api.add_image(&id, page_index(page), file_id)?);
        }
        Commands::Set {
            id,
            element,
            page,
            content,
            x,
            y,
            width,
            height,
            font_size,
        } => {
            let update = ElementUpdate {
                content,
                x_pct: x,
                y_pct: y,
                width_pct: width,
                height_pct: height,
                font_size,
            };
            print_messages(&api.update_element(&id, page_index(page), &element, &update)?);
        }
        Commands::Rm { id, element, page } => {
            print_messages(&api.remove_element(&id, page_index(page), &element)?);
        }
        Commands::Move {
            id,
            element,
            position,
            page,
        } => {
            print_messages(&api.move_element(
                &id,
                page_index(page),
                &element,
                position.saturating_sub(1),
            )?);
        }
        Commands::Doctor { id } => {
            let result = api.doctor(&id)?;
            print_messages(&result);
            print_issues(&result.issues);
        }
    }
    Ok(())
}

/// CLI page numbers are 1-based; the model indexes from 0.
fn page_index(page: usize) -> usize {
    page.saturating_sub(1)
}

fn print_messages(result: &CmdResult) {
    for msg in &result.messages {
        match msg.level {
            MessageLevel::Info => println!("{}", msg.content),
            MessageLevel::Success => println!("{}", msg.content.green()),
            MessageLevel::Warning => println!("{}", msg.content.yellow()),
            MessageLevel::Error => eprintln!("{}", msg.content.red()),
        }
    }
}

fn print_document_list(docs: &[Document]) {
    if docs.is_empty() {
        println!("No documents.");
        return;
    }
    for doc in docs {
        println!(
            "{}  {}  {} page(s)  updated {}",
            doc.id.to_string().dimmed(),
            doc.title.bold(),
            doc.pages.len(),
            doc.updated_at.format("%Y-%m-%d %H:%M")
        );
    }
}

fn print_document(doc: &Document) {
    println!("{} ({})", doc.title.bold(), doc.id.to_string().dimmed());
    for (index, page) in doc.pages.iter().enumerate() {
        let template = page
            .template_id
            .as_deref()
            .map(|t| format!(" [template {}]", t))
            .unwrap_or_default();
        println!("Page {}{}", index + 1, template);

        match page.content() {
            PageContent::Elements(els) => {
                for el in els {
                    let desc = if let Some(text) = el.text_content() {
                        let size = el
                            .font_size()
                            .map(|s| format!(", {}pt", s))
                            .unwrap_or_default();
                        format!("text \"{}\"{}", text, size)
                    } else {
                        format!("image {}", el.file_id().unwrap_or("<none>"))
                    };
                    println!(
                        "  {} {} at ({}, {}) {}x{}",
                        el.id.dimmed(),
                        desc,
                        el.x_pct,
                        el.y_pct,
                        el.width_pct,
                        el.height_pct
                    );
                }
            }
            PageContent::Legacy(areas) => {
                println!("  {}", "(legacy template slots)".yellow());
                for (area, content) in areas {
                    println!("  {}: {}", area.dimmed(), content);
                }
            }
            PageContent::Blank => println!("  {}", "(blank)".dimmed()),
        }
    }
}

fn print_issues(issues: &[Issue]) {
    for issue in issues {
        match issue.severity {
            Severity::Warning => println!("{}", format!("warning: {}", issue).yellow()),
            Severity::Error => println!("{}", format!("error: {}", issue).red()),
        }
    }
}
