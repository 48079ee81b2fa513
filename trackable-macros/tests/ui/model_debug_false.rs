use trackable_macros::model;

#[model(debug = false)]
struct Secret {
    token: String,
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret(..)")
    }
}

fn main() {
    let s = Secret::default();
    let _ = format!("{:?}", s); // 手写 Debug 可编译说明未自动派生
    let _ = s.token.len();
}
