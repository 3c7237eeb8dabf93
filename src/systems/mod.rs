pub mod sdk;
#[cfg(feature="system-scoring")] pub mod scoring;
#[cfg(feature="system-sniping")] pub mod sniping;
