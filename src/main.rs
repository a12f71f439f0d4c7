fn main() {
    ventanas_enhance::run();
}
