/// Build the canonical payload a signature commits to.
///
/// ## Format
///
/// ```text
/// UPPERCASE(method) + " " + path + "\n" +
/// name_1 + ": " + value_1 + "\n" +
/// ...
/// name_n + ": " + value_n + "\n" +
/// body
/// ```
///
/// Headers are written in the given order and header names are written as
/// given. Nothing is escaped, so names are expected to be valid HTTP tokens.
pub fn build_payload(method: &str, path: &str, headers: &[(&str, &[u8])], body: &[u8]) -> Vec<u8> {
    let headers_len: usize = headers
        .iter()
        .map(|(name, value)| name.len() + value.len() + 3)
        .sum();
    let mut payload =
        Vec::with_capacity(method.len() + path.len() + 2 + headers_len + body.len());

    payload.extend_from_slice(method.to_ascii_uppercase().as_bytes());
    payload.push(b' ');
    payload.extend_from_slice(path.as_bytes());
    payload.push(b'\n');

    for (name, value) in headers {
        payload.extend_from_slice(name.as_bytes());
        payload.extend_from_slice(b": ");
        payload.extend_from_slice(value);
        payload.push(b'\n');
    }

    payload.extend_from_slice(body);
    payload
}
