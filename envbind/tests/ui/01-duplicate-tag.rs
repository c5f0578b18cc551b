use envbind::Bindable;

#[derive(Bindable)]
pub struct Config {
    #[bind(mapstructure = "a", mapstructure = "b")]
    a: String,
}

fn main() {}
