//! Placeholder homepage copy.
//!
//! These are the defaults of `[home] hero` and `[home] sub_hero`.

/// Homepage headline.
pub const HERO: &str = "Unlocking Enigma Bits: Navigating Rust, Python, TypeScript, and Linux for Next-gen Web Development and Productivity.";

/// Homepage introduction under the headline.
pub const SUB_HERO: &str = "Welcome to my tech-savvy corner! Join me on a thrilling journey where Rust, Python, and TypeScript come to life in the backend and frontend realms. I wield the power of cutting-edge JS frameworks like Astro and Next.js, crafting seamless digital experiences that push the boundaries of the web. Dive into the powerful world of Actix-Web, where high-performance meets elegant design, and explore the magic of Tauri, bridging the gap between native apps and the web. Let's unravel the Linux secrets and supercharge your productivity, creating a symphony of code, frameworks, and open-source marvels that will leave you inspired!";
