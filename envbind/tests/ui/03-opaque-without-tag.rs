use envbind::Bindable;

#[derive(Bindable)]
pub struct Config {
    #[bind(opaque)]
    api_key: String,
}

fn main() {}
