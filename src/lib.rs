// Slotkeys Simulator
// Headless frontend: replays scripted input ticks against an in-memory
// container, standing in for the external game host.

pub mod sim;
