/// Adapters that only depend on other ports, usable on every target.

pub mod headless_notifier;

pub use headless_notifier::HeadlessNotifier;
