use envbind::Bindable;

#[derive(Bindable)]
pub struct Config {
    #[bind(mapstructure = "a", opaque = "yes")]
    a: String,
}

fn main() {}
