use envbind::Bindable;

#[derive(Bindable)]
pub enum Config {
    Postgres,
    Sqlite,
}

fn main() {}
