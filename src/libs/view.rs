use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn status(is_monitoring: bool, identity: Option<&str>) {
        let mut table = Table::new();

        table.add_row(row!["MONITORING", if is_monitoring { "yes" } else { "no" }]);
        table.add_row(row!["TARGET", identity.unwrap_or("-")]);
        table.printstd();
    }

    pub fn logs(lines: &[String]) {
        for line in lines {
            println!("{}", line);
        }
    }
}
