/// `UrlResolver` usage example
use urlsculpt::{ResolverSource, UrlParser};

fn main() {
    env_logger::init();

    let mut parser = UrlParser::new();
    parser.parse("http://a.com/api/users?name=Tom&name=Jerry&age=20");

    // Start from the last parse
    let mut resolver = parser.resolver(ResolverSource::LastParse);

    // Insert after the first "users" segment
    resolver.append_param("posts", Some("users"), 0);
    println!("After append_param: {}", resolver); // http://a.com/api/users/posts?name=Tom&name=Jerry&age=20
    println!();

    // Drop the second "name" pair
    resolver.remove_query("name", 1);
    println!("After remove_query: {}", resolver); // http://a.com/api/users/posts?name=Tom&age=20
    println!();

    // Put a pair in front of "age"
    resolver.prepend_query("page", "2", Some("age"), 0);
    println!("After prepend_query: {}", resolver); // http://a.com/api/users/posts?name=Tom&page=2&age=20
    println!();

    // History still holds the original parse
    if let Some(original) = parser.last_parse_history() {
        println!("History: {}", original);
    }
}
