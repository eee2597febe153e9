pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { message: "ok" };
        assert_eq!(h.message, "ok");
    }
}
