use hexpad_routes::{DEFAULT_DEV_ORIGIN, RouteTable};

#[test]
fn default_table_lists_every_stock_prefix() {
    let table = RouteTable::dev_defaults(DEFAULT_DEV_ORIGIN).unwrap();
    let prefixes: Vec<&str> = table.routes().iter().map(|r| r.prefix()).collect();
    assert_eq!(
        prefixes,
        vec![
            "/Indiana-Jones-PNG-HD-Image.png",
            "/character.png",
            "/chat",
            "/game",
            "/heart.png",
            "/map",
            "/snake.png",
            "/state",
            "/user",
        ]
    );
}

#[test]
fn chat_goes_over_websocket_to_the_same_host() {
    let table = RouteTable::dev_defaults(DEFAULT_DEV_ORIGIN).unwrap();
    let chat = table.resolve("/chat").unwrap();
    assert!(chat.is_websocket());
    assert_eq!(chat.origin(), "ws://localhost:3334");

    let others = table.routes().iter().filter(|r| r.prefix() != "/chat");
    for r in others {
        assert_eq!(r.origin(), "http://localhost:3334", "prefix {}", r.prefix());
    }
}

#[test]
fn https_origin_upgrades_chat_to_wss() {
    let table = RouteTable::dev_defaults("https://game.example:8443").unwrap();
    assert_eq!(table.resolve("/chat").unwrap().origin(), "wss://game.example:8443");
    assert_eq!(
        table.forward_url("/snake.png").unwrap().as_str(),
        "https://game.example:8443/snake.png"
    );
}

#[test]
fn bad_origin_is_rejected() {
    assert!(RouteTable::dev_defaults("localhost:3334").is_err());
    assert!(RouteTable::dev_defaults("http://localhost:3334/api").is_err());
}

#[test]
fn websocket_origin_keeps_http_routes_on_http() {
    let table = RouteTable::dev_defaults("ws://localhost:3334").unwrap();
    assert_eq!(table.resolve("/user").unwrap().origin(), "http://localhost:3334");
    assert_eq!(table.resolve("/chat").unwrap().origin(), "ws://localhost:3334");

    let table = RouteTable::dev_defaults("wss://game.example").unwrap();
    assert_eq!(table.resolve("/map").unwrap().origin(), "https://game.example");
    assert_eq!(table.resolve("/chat").unwrap().origin(), "wss://game.example");
}
