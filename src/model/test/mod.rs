mod blackjack;
