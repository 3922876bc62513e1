mod broken;
mod samples;
mod scanning;
