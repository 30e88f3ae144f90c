//! Interactive console menu
//!
//! Reads answers line by line from any async reader and writes prompts to any
//! async writer; `main` wires it to stdin/stdout.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::{
    error::AppResult,
    models::book::{parse_read_answer, NewBook},
    services::library::LibraryService,
};

const MENU: &str = "\nPersonal Library Manager
1. Add a book
2. Remove a book
3. Search for a book
4. Display all books
5. Display statistics
6. Exit
";

/// Menu choice entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Search,
    DisplayAll,
    Statistics,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::Remove),
            "3" => Some(MenuChoice::Search),
            "4" => Some(MenuChoice::DisplayAll),
            "5" => Some(MenuChoice::Statistics),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub struct Console<R, W> {
    library: LibraryService,
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(library: LibraryService, input: R, output: W) -> Self {
        Self {
            library,
            input,
            output,
        }
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// An invalid publication year ends the session with a validation error.
    pub async fn run(mut self) -> AppResult<()> {
        loop {
            self.write(MENU).await?;
            let Some(choice) = self.prompt("Enter your choice: ").await? else {
                return self.exit().await;
            };

            let done = match MenuChoice::parse(&choice) {
                Some(MenuChoice::Add) => self.add_book().await?,
                Some(MenuChoice::Remove) => self.remove_book().await?,
                Some(MenuChoice::Search) => self.search_books().await?,
                Some(MenuChoice::DisplayAll) => {
                    self.display_books().await?;
                    false
                }
                Some(MenuChoice::Statistics) => {
                    self.display_statistics().await?;
                    false
                }
                Some(MenuChoice::Exit) => true,
                None => {
                    self.write("Invalid choice! Please try again.\n\n").await?;
                    false
                }
            };

            if done {
                return self.exit().await;
            }
        }
    }

    /// Returns `true` when input ended mid-flow
    async fn add_book(&mut self) -> AppResult<bool> {
        let mut answers = Vec::with_capacity(5);
        for question in [
            "Enter book title: ",
            "Enter author: ",
            "Enter publication year: ",
            "Enter genre: ",
            "Have you read this book? (yes/no): ",
        ] {
            match self.prompt(question).await? {
                Some(answer) => answers.push(answer),
                None => return Ok(true),
            }
        }

        let read = parse_read_answer(&answers[4]);
        let mut answers = answers.into_iter();
        let mut next = || answers.next().unwrap_or_default();
        let new_book = NewBook {
            title: next(),
            author: next(),
            year: next(),
            genre: next(),
            read,
        };

        self.library.add(new_book.into_book(None)?).await?;
        self.write("Book added successfully!\n\n").await?;
        Ok(false)
    }

    async fn remove_book(&mut self) -> AppResult<bool> {
        let Some(title) = self.prompt("Enter the title of the book to remove: ").await? else {
            return Ok(true);
        };

        match self.library.remove(&title).await? {
            Some(_) => self.write("Book removed successfully!\n\n").await?,
            None => self.write("Book not found.\n\n").await?,
        }
        Ok(false)
    }

    async fn search_books(&mut self) -> AppResult<bool> {
        let Some(query) = self
            .prompt("Enter book title or author name to search: ")
            .await?
        else {
            return Ok(true);
        };

        let results = self.library.search(&query).await;
        if results.is_empty() {
            self.write("No matching books found.\n\n").await?;
        } else {
            self.write("Matching Books:\n").await?;
            for book in &results {
                self.write(&format!("{}\n", book)).await?;
            }
        }
        Ok(false)
    }

    async fn display_books(&mut self) -> AppResult<()> {
        let books = self.library.list_all().await;
        if books.is_empty() {
            return self.write("Your library is empty.\n\n").await;
        }

        self.write("Your Library:\n").await?;
        for book in &books {
            self.write(&format!("{}\n", book)).await?;
        }
        self.write("\n").await
    }

    async fn display_statistics(&mut self) -> AppResult<()> {
        let stats = self.library.statistics().await;
        self.write(&format!(
            "Total books: {}\nPercentage read: {}%\n\n",
            stats.total,
            stats.percentage_label()
        ))
        .await
    }

    async fn exit(&mut self) -> AppResult<()> {
        self.write("Library saved to file. Goodbye!\n").await?;
        self.library.save().await
    }

    async fn prompt(&mut self, question: &str) -> AppResult<Option<String>> {
        self.write(question).await?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        Ok(Some(answer.to_string()))
    }

    async fn write(&mut self, text: &str) -> AppResult<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}
