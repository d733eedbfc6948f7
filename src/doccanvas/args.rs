use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser, Debug)]
#[command(name = "doccanvas")]
#[command(about = "Inspect and edit canvas-style document files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the document files
    #[arg(long, global = true, default_value = ".doccanvas")]
    pub dir: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new document
    #[command(alias = "n")]
    New {
        /// Title of the document
        title: String,
    },

    /// List documents
    #[command(alias = "ls")]
    List,

    /// Show a document with each page's resolved content
    #[command(alias = "s")]
    Show {
        /// Document id
        id: Uuid,
    },

    /// Delete a document permanently
    Delete {
        /// Document id
        id: Uuid,
    },

    /// Append a page to a document
    AddPage {
        /// Document id
        id: Uuid,

        /// Template id for the page (omit for a blank freeform page)
        #[arg(long)]
        template: Option<String>,
    },

    /// Add a text element to a page
    AddText {
        /// Document id
        id: Uuid,

        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Add an image element referencing an already-uploaded asset
    AddImage {
        /// Document id
        id: Uuid,

        /// File id of the asset
        file_id: String,

        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Update an element's content, geometry, or font size
    Set {
        /// Document id
        id: Uuid,

        /// Element id
        element: String,

        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,

        /// New content (text payload, or file id for images)
        #[arg(long)]
        content: Option<String>,

        /// New x position in percent of page width
        #[arg(long)]
        x: Option<f64>,

        /// New y position in percent of page height
        #[arg(long)]
        y: Option<f64>,

        /// New width in percent of page width
        #[arg(long)]
        width: Option<f64>,

        /// New height in percent of page height
        #[arg(long)]
        height: Option<f64>,

        /// New font size (text elements only)
        #[arg(long)]
        font_size: Option<u32>,
    },

    /// Remove an element from a page
    Rm {
        /// Document id
        id: Uuid,

        /// Element id
        element: String,

        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Move an element to a new position in the z-order
    Move {
        /// Document id
        id: Uuid,

        /// Element id
        element: String,

        /// Target position (1-based; later positions render on top)
        position: usize,

        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Check a document for non-fatal problems
    Doctor {
        /// Document id
        id: Uuid,
    },
}
