/// Return the argument unchanged
pub fn handle_data<T>(data: T) -> T {
    data
}
