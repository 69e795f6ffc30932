use urlsculpt::UrlParser;

fn main() {
    env_logger::init();

    let mut parser = UrlParser::new();
    let result = parser.parse("https://example.com:8080/api/users?name=Tom&name=Jerry&age=20#top");

    println!("URL: {}", result.url());
    println!("Protocol: {}", result.protocol()); // https
    println!("Host: {}", result.host()); // example.com:8080
    println!("Port: {}", result.port()); // 8080
    println!("Pathname: {}", result.pathname()); // /api/users
    println!("Segments: {:?}", result.param_sequence()); // ["api", "users"]
    println!("Queryname: {}", result.queryname()); // ?name=Tom&name=Jerry&age=20
    println!("Query order: {:?}", result.query_sequence()); // ["name", "name", "age"]
    println!("Query values: {:?}", result.query()); // {"age": ["20"], "name": ["Tom", "Jerry"]}
    println!("Hash: {}", result.hash()); // #top
}
