use fledge::{Launcher, LaunchOptions, ServiceDescriptor};

#[tokio::main]
async fn main() {
	tracing_subscriber::fmt().init();

	let args: Vec<String> = std::env::args().skip(1).collect();
	if args.is_empty() {
		eprintln!("usage: host <script> [script ...]");
		return;
	}

	let services: Vec<ServiceDescriptor> = args
		.iter()
		.enumerate()
		.map(|(i, script)| ServiceDescriptor::new(format!("svc{}", i), script.clone()))
		.collect();

	let options = LaunchOptions {
		verbose: true,
		..Default::default()
	};
	let mut launcher = Launcher::new(services, options);
	let mut exits = launcher.exit_events().expect("stream already claimed");

	let launched = launcher.run_all().await;
	println!("launched {} services", launched);

	for _ in 0..launched {
		if let Some(event) = exits.recv().await {
			println!("{} exited ({})", event.id, event.code);
		}
	}
}
