use colored::Colorize;

use crate::cli::{DocumentCommand, FolderCommand};
use crate::context::AppContext;
use crate::error::Result;
use crate::models::document::NewDocument;
use crate::models::{Document, DocumentQuery};

use super::output::{
    format_bytes, format_time, or_dash, print_empty, print_json, print_success, table, truncate,
};

/// Handle `collabdesk documents ...`
pub async fn handle_documents(ctx: &AppContext, command: DocumentCommand) -> Result<()> {
    let documents = ctx.documents();
    match command {
        DocumentCommand::List {
            search,
            folder,
            page,
            json,
        } => {
            let query = DocumentQuery {
                search,
                folder_id: folder,
                page: Some(page),
                limit: Some(ctx.config().ui.page_size),
            };
            let docs = documents.list(&query).await.into_result()?;
            if json {
                return print_json(&docs);
            }
            print_documents(&docs);
        }
        DocumentCommand::Show { id, json } => {
            let doc = documents.get(&id).await.into_result()?;
            if json {
                return print_json(&doc);
            }
            println!("{} {}", "Name:   ".bold(), doc.name);
            println!("{} {}", "ID:     ".bold(), doc.id.cyan());
            println!("{} {}", "Size:   ".bold(), format_bytes(doc.size));
            println!("{} {}", "Type:   ".bold(), or_dash(doc.mime_type.as_deref()));
            println!("{} {}", "Folder: ".bold(), or_dash(doc.parent_id.as_deref()));
            println!("{} {}", "Tags:   ".bold(), doc.tags.join(", "));
            println!("{} {}", "Updated:".bold(), format_time(doc.updated_at));
        }
        DocumentCommand::Create { name, folder, tag } => {
            let input = NewDocument {
                name,
                parent_id: folder,
                tags: tag,
                content: None,
            };
            let doc = documents.create(&input).await?;
            print_success(&format!("Created document {} ({})", doc.name, doc.id));
        }
        DocumentCommand::Delete { id } => {
            documents.delete(&id).await?;
            print_success(&format!("Deleted document {}", id));
        }
    }
    Ok(())
}

/// Handle `collabdesk folders ...`
pub async fn handle_folders(ctx: &AppContext, command: FolderCommand) -> Result<()> {
    let folders = ctx.folders();
    match command {
        FolderCommand::List { json } => {
            let list = folders.list().await.into_result()?;
            if json {
                return print_json(&list);
            }
            if list.is_empty() {
                print_empty("folders");
                return Ok(());
            }
            let mut t = table(&["ID", "Name", "Parent", "Documents"]);
            for folder in list {
                t.add_row(prettytable::row![
                    folder.id.cyan(),
                    truncate(&folder.name, 40),
                    or_dash(folder.parent_id.as_deref()),
                    folder
                        .document_count
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "-".to_string())
                ]);
            }
            t.printstd();
        }
        FolderCommand::Documents { id, json } => {
            let docs = folders.documents(&id).await.into_result()?;
            if json {
                return print_json(&docs);
            }
            print_documents(&docs);
        }
    }
    Ok(())
}

fn print_documents(docs: &[Document]) {
    if docs.is_empty() {
        print_empty("documents");
        return;
    }
    let mut t = table(&["ID", "Name", "Size", "Tags", "Updated"]);
    for doc in docs {
        t.add_row(prettytable::row![
            doc.id.cyan(),
            truncate(&doc.name, 40),
            format_bytes(doc.size),
            truncate(&doc.tags.join(", "), 30),
            format_time(doc.updated_at)
        ]);
    }
    t.printstd();
    let total: u64 = docs.iter().map(|d| d.size).sum();
    println!("{} documents, {}", docs.len(), format_bytes(total));
}
