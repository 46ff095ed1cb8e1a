//! Port allocator tests

use std::net::TcpListener;

use crate::port::find_free_port;

#[test]
fn allocated_port_is_immediately_rebindable() {
    let port = find_free_port().unwrap();
    assert!(port > 0);
    TcpListener::bind(("127.0.0.1", port)).expect("allocated port should be free for rebinding");
}

#[test]
fn consecutive_allocations_are_independent() {
    let a = find_free_port().unwrap();
    let b = find_free_port().unwrap();

    // The OS may hand out the same number twice once the probe is released;
    // what matters is that each returned port is bindable afterwards.
    let _la = TcpListener::bind(("127.0.0.1", a)).unwrap();
    if b != a {
        let _lb = TcpListener::bind(("127.0.0.1", b)).unwrap();
    }
}
