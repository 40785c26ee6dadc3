use crate::core::store::MobileStore;
use crate::domain::model::Mobile;
use crate::domain::ports::Console;
use crate::utils::error::Result;
use crate::utils::validation::parse_field;

/// Menu-driven command loop over a [`MobileStore`]. Generic over the console
/// so sessions can be driven by scripted input in tests.
pub struct MenuEngine<C: Console> {
    console: C,
    store: MobileStore,
}

impl<C: Console> MenuEngine<C> {
    pub fn new(console: C) -> Self {
        Self {
            console,
            store: MobileStore::new(),
        }
    }

    pub fn store(&self) -> &MobileStore {
        &self.store
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                tracing::debug!("input stream closed, leaving menu");
                break;
            };

            match choice.trim() {
                "1" => self.add_mobile()?,
                "2" => self.display_mobiles()?,
                "3" => self.search_by_brand()?,
                "4" => self.delete_mobile()?,
                "5" => {
                    self.console.write_line("Exiting program...")?;
                    break;
                }
                _ => self
                    .console
                    .write_line("Invalid choice, please try again.")?,
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        self.console.write_line("Menu:")?;
        self.console.write_line("1. Add Mobile")?;
        self.console.write_line("2. Display All Mobiles")?;
        self.console.write_line("3. Search Mobile by Brand")?;
        self.console.write_line("4. Delete Mobile")?;
        self.console.write_line("5. Exit")
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        self.console.write(message)?;
        self.console.read_line()
    }

    fn prompt_or_default(&mut self, message: &str) -> Result<String> {
        Ok(self.prompt(message)?.unwrap_or_default())
    }

    /// Prompts for a numeric field. A line that fails to parse is reported to
    /// the console and `None` is returned so the current operation aborts
    /// without touching the store.
    fn read_number<T>(&mut self, message: &str, field: &str) -> Result<Option<T>>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.prompt_or_default(message)?;
        match parse_field(field, &raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::debug!("rejected input for {}: {}", field, e);
                self.console.write_line(&e.to_string())?;
                Ok(None)
            }
        }
    }

    fn add_mobile(&mut self) -> Result<()> {
        let Some(id) = self.read_number("Enter Mobile ID: ", "Mobile ID")? else {
            return Ok(());
        };
        let brand = self.prompt_or_default("Enter Brand: ")?;
        let model = self.prompt_or_default("Enter Model: ")?;
        let Some(price) = self.read_number("Enter Price: ", "Price")? else {
            return Ok(());
        };
        let Some(launched_year) = self.read_number("Enter Launched Year: ", "Launched Year")?
        else {
            return Ok(());
        };

        let outcome = self.store.add(Mobile {
            id,
            brand,
            model,
            price,
            launched_year,
        });
        tracing::debug!("add: {}", outcome);
        self.console.write_line(&outcome.to_string())
    }

    fn display_mobiles(&mut self) -> Result<()> {
        if self.store.is_empty() {
            return self.console.write_line("No mobiles available.");
        }
        for mobile in self.store.all() {
            self.console.write_line(&mobile.to_string())?;
        }
        Ok(())
    }

    fn search_by_brand(&mut self) -> Result<()> {
        let brand = self.prompt_or_default("Enter Brand: ")?;
        let matches = self.store.search_by_brand(&brand);
        if matches.is_empty() {
            let line = format!("No mobiles found for brand: {}", brand);
            return self.console.write_line(&line);
        }

        self.console
            .write_line(&format!("Mobiles found for brand: {}", brand))?;
        for mobile in matches {
            let line = format!(
                "Mobile ID: {}, Model: {}, Price: {:.2}, Launched Year: {}",
                mobile.id, mobile.model, mobile.price, mobile.launched_year
            );
            self.console.write_line(&line)?;
        }
        Ok(())
    }

    fn delete_mobile(&mut self) -> Result<()> {
        let Some(id) = self.read_number::<u32>("Enter Mobile ID to delete: ", "Mobile ID")? else {
            return Ok(());
        };
        let outcome = self.store.delete(id);
        tracing::debug!("delete: {}", outcome);
        self.console.write_line(&outcome.to_string())
    }
}
